use codejam::{Result, Tokens};
use proptest::prelude::*;

fn token() -> impl Strategy<Value = String> {
    // Printable ASCII, minus the space.
    "[!-~]{1,8}"
}

fn whitespace() -> impl Strategy<Value = String> {
    "[ \t\r\n\x0b\x1c-\x1f]{1,4}"
}

proptest! {
    #[test]
    fn layout_does_not_change_the_tokens(
        tokens in prop::collection::vec(token(), 0..20),
        gaps in prop::collection::vec(whitespace(), 21),
    ) {
        let mut input = gaps[0].clone();
        for (token, gap) in tokens.iter().zip(&gaps[1..]) {
            input.push_str(token);
            input.push_str(gap);
        }

        let read: Vec<String> = Tokens::new(input.as_bytes())
            .strings()
            .collect::<Result<_>>()
            .unwrap();
        prop_assert_eq!(read, tokens);
    }

    #[test]
    fn many_matches_one_at_a_time(values in prop::collection::vec(any::<i64>(), 0..30)) {
        let input = values
            .iter()
            .map(i64::to_string)
            .collect::<Vec<_>>()
            .join("\n");

        let mut grouped = Tokens::new(input.as_bytes());
        let grouped: Vec<i64> = grouped
            .next_many(values.len())
            .collect::<Result<_>>()
            .unwrap();

        let mut single = Tokens::new(input.as_bytes());
        let single: Vec<i64> = (0..values.len())
            .map(|_| single.next_token().unwrap())
            .collect();

        prop_assert_eq!(&grouped, &single);
        prop_assert_eq!(grouped, values);
    }

    #[test]
    fn counted_pairs_leave_the_rest(
        pairs in prop::collection::vec((any::<u32>(), "[a-z]{1,5}"), 0..10),
        rest in "[a-z]{1,5}",
    ) {
        let mut input = pairs.len().to_string();
        for (n, word) in &pairs {
            input.push_str(&format!(" {} {}", n, word));
        }
        input.push(' ');
        input.push_str(&rest);

        let mut tokens = Tokens::new(input.as_bytes());
        let read: Vec<(u32, String)> = tokens.collect_counted().unwrap();
        prop_assert_eq!(read, pairs);
        prop_assert_eq!(tokens.next_raw().unwrap(), rest.as_str());
    }
}
