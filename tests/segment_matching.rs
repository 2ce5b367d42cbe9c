use recognizer::classifier::{Classifier, Status};
use recognizer::matcher::{lookahead, match_segment, tokenize};

#[test]
fn fixed_phrase_membership() {
    let phrase = Classifier::fixed("hello world. test");
    assert!(phrase.is_completable());
    assert_eq!(phrase.key(), None);
    assert!(phrase.is_part_of_input(&tokenize("hello")));
    assert!(phrase.is_part_of_input(&tokenize("hello world.")));
    for wrong in ["hellz", "hello worlz.", "hello world", "hello world. foo"] {
        assert!(!phrase.is_part_of_input(&tokenize(wrong)), "'{wrong}' should not be part of input");
    }
    assert!(phrase.is_input_completed(&tokenize("hello world. test")));
    assert!(!phrase.is_input_completed(&tokenize("hello world. foo")));
    assert!(!phrase.is_input_completed(&tokenize("foo")));
}

#[test]
fn greedy_never_completes() {
    let greedy = Classifier::greedy("payload");
    assert!(!greedy.is_completable());
    assert_eq!(greedy.key(), Some("payload"));
    assert!(greedy.is_part_of_input(&tokenize("test")));
    assert!(greedy.is_part_of_input(&tokenize("foo bar")));
    assert!(!greedy.is_input_completed(&[]));
    assert!(!greedy.is_input_completed(&tokenize("foo bar")));
}

#[test]
fn status_per_prefix() {
    let phrase = Classifier::fixed("remind me to");
    assert_eq!(phrase.status(&tokenize("remind me")), Status::Processing);
    assert_eq!(phrase.status(&tokenize("remind me to")), Status::Done);
    assert_eq!(phrase.status(&tokenize("remind you")), Status::NotFound);
}

#[test]
fn segment_stops_after_complete_phrase() {
    let tokens = tokenize("remind me to do something");
    let consumed = match_segment(&Classifier::fixed("remind me to"), &tokens).expect("phrase matches");
    assert_eq!(consumed, &tokens[..3]);
}

#[test]
fn segment_out_of_tokens() {
    let tokens = tokenize("show me");
    assert_eq!(match_segment(&Classifier::fixed("show me the weather"), &tokens), None);
    assert_eq!(tokens, tokenize("show me"), "tokens are left untouched");
    assert_eq!(match_segment(&Classifier::fixed("show"), &[]), None);
}

#[test]
fn greedy_segment_takes_the_rest() {
    let tokens = tokenize("do some cool stuff");
    assert_eq!(match_segment(&Classifier::greedy("reminder"), &tokens), Some(tokens.as_slice()));
    assert_eq!(match_segment(&Classifier::greedy("reminder"), &[]), Some(&[][..]));
}

#[test]
fn time_segment_prefers_longest_completion() {
    let time = Classifier::time("time");
    let tokens = tokenize("tomorrow at 5pm remind me");
    assert_eq!(match_segment(&time, &tokens), Some(&tokens[..3]));
    let tokens = tokenize("tomorrow at remind me");
    assert_eq!(match_segment(&time, &tokens), Some(&tokens[..1]), "falls back to the last completed prefix");
}

#[test]
fn lookahead_splits_at_first_full_match() {
    let tokens = tokenize("do some cool and awesome stuff at 5pm");
    let (run, consumed) = lookahead(&Classifier::time("time"), true, &tokens)
        .expect("valid grammar")
        .expect("split found");
    assert_eq!(run, &tokens[..6]);
    assert_eq!(consumed, &tokens[6..]);
}

#[test]
fn lookahead_skips_partial_anchor() {
    // "at noon" is not a time expression, so the run keeps both tokens
    let tokens = tokenize("meet at noon at 5pm");
    let (run, consumed) = lookahead(&Classifier::time("time"), true, &tokens)
        .expect("valid grammar")
        .expect("split found");
    assert_eq!(run, &tokens[..3]);
    assert_eq!(consumed, &tokens[3..]);
}

#[test]
fn lookahead_without_split() {
    let tokens = tokenize("do something");
    assert_eq!(lookahead(&Classifier::time("time"), true, &tokens).expect("valid grammar"), None);
    assert_eq!(lookahead(&Classifier::time("time"), true, &tokenize("tonight")).expect("valid grammar"), None, "greedy run needs a token");
}

#[test]
fn lookahead_rejects_greedy_successor() {
    let tokens = tokenize("a b c");
    assert!(lookahead(&Classifier::greedy("other"), true, &tokens).is_err());
}
