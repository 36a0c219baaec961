//! Randomized transcripts: menu keywords mixed with noise, spoken by any origin.

use std::sync::Arc;

use brew_core::{
    Category, ChatMessage, MessageOrigin, OrderSynchronizer, SelectionState, SyncOutcome,
    default_catalog,
};
use proptest::prelude::*;

const NOISE: &[&str] = &[
    "hi", "please", "actually", "no wait", "make it", "and", "with", "thanks", "um", "boat",
    "goat", "shot", "cream", "milk", "!", ",",
];

fn catalog_keywords() -> Vec<String> {
    default_catalog()
        .entries()
        .iter()
        .flat_map(|entry| entry.keywords.iter().cloned())
        .collect()
}

fn arb_fragment() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => (prop::sample::select(catalog_keywords()), any::<bool>()).prop_map(
            |(keyword, shout)| if shout { keyword.to_uppercase() } else { keyword }
        ),
        2 => prop::sample::select(NOISE).prop_map(|word| word.to_string()),
        1 => "[a-zA-Z ]{0,12}",
    ]
}

fn arb_origin() -> impl Strategy<Value = MessageOrigin> {
    prop_oneof![
        Just(MessageOrigin::Human),
        Just(MessageOrigin::Agent),
        Just(MessageOrigin::System),
    ]
}

fn arb_message() -> impl Strategy<Value = ChatMessage> {
    (arb_origin(), prop::collection::vec(arb_fragment(), 0..6))
        .prop_map(|(origin, words)| ChatMessage::new(origin, words.join(" ")))
}

fn arb_transcript() -> impl Strategy<Value = Vec<ChatMessage>> {
    prop::collection::vec(arb_message(), 0..12)
}

fn run(transcript: &[ChatMessage]) -> Arc<SelectionState> {
    let mut sync = OrderSynchronizer::new(default_catalog());
    sync.on_transcript_changed(transcript);
    Arc::clone(sync.state())
}

fn is_canonical(state: &SelectionState) -> bool {
    let catalog = default_catalog();
    let singles = [Category::Beverage, Category::Size, Category::Milk]
        .into_iter()
        .all(|category| {
            state
                .single(category)
                .is_none_or(|name| catalog.contains(category, name))
        });
    singles
        && state
            .extras
            .iter()
            .all(|extra| catalog.contains(Category::Extra, extra))
}

proptest! {
    #[test]
    fn test_every_prefix_selects_only_catalog_names(transcript in arb_transcript()) {
        for end in 0..=transcript.len() {
            let state = run(&transcript[..end]);
            prop_assert!(is_canonical(&state), "non-canonical state {:?}", state);
        }
    }

    #[test]
    fn test_selection_never_shrinks_as_transcript_grows(transcript in arb_transcript()) {
        let mut sync = OrderSynchronizer::new(default_catalog());
        let mut previous = Arc::clone(sync.state());

        for end in 1..=transcript.len() {
            sync.on_transcript_changed(&transcript[..end]);
            let current = Arc::clone(sync.state());

            prop_assert!(previous.extras.is_subset(&current.extras));
            for category in [Category::Beverage, Category::Size, Category::Milk] {
                if previous.single(category).is_some() {
                    prop_assert!(current.single(category).is_some(), "{} was cleared", category);
                }
            }
            previous = current;
        }
    }

    #[test]
    fn test_rerun_keeps_the_same_instance(transcript in arb_transcript()) {
        let mut sync = OrderSynchronizer::new(default_catalog());
        sync.on_transcript_changed(&transcript);
        let first = Arc::clone(sync.state());

        let expected = if transcript.iter().any(|message| message.origin.is_human()) {
            SyncOutcome::Unchanged
        } else {
            SyncOutcome::Skipped
        };
        prop_assert_eq!(sync.on_transcript_changed(&transcript), expected);
        prop_assert!(Arc::ptr_eq(&first, sync.state()));
    }

    #[test]
    fn test_only_human_messages_influence_selection(transcript in arb_transcript()) {
        let human_only: Vec<ChatMessage> = transcript
            .iter()
            .filter(|message| message.origin.is_human())
            .cloned()
            .collect();

        prop_assert_eq!(run(&transcript), run(&human_only));
    }
}
