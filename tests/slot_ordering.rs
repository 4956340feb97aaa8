use artist_compare_wasm::domain::artist_data::{ArtistStream, SelectedArtist, SlotIndex};
use artist_compare_wasm::domain::explore::{ExploreMessage, ExploreState};
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;

#[derive(Debug, Clone)]
enum Op {
    Add,
    Replace(usize, u8),
    Remove(usize),
}

impl Arbitrary for Op {
    fn arbitrary(g: &mut Gen) -> Self {
        match u8::arbitrary(g) % 3 {
            0 => Op::Add,
            1 => Op::Replace(usize::arbitrary(g) % 8, u8::arbitrary(g)),
            _ => Op::Remove(usize::arbitrary(g) % 8),
        }
    }
}

impl Op {
    fn message(&self) -> ExploreMessage {
        match self {
            Op::Add => ExploreMessage::AddArtist,
            Op::Replace(index, tag) => {
                let id = format!("artist-{}", tag);
                ExploreMessage::AddArtistDetails {
                    meta: SelectedArtist::named(SlotIndex::from(*index), id.as_str(), &id),
                    streams: vec![ArtistStream::new(id.as_str(), vec![])],
                }
            }
            Op::Remove(index) => ExploreMessage::RemoveArtist(SlotIndex::from(*index)),
        }
    }
}

fn indices(state: &ExploreState) -> Vec<usize> {
    state.selected_artists().iter().map(|a| a.select_index.value()).collect()
}

#[quickcheck]
fn indices_stay_strictly_ascending(ops: Vec<Op>) -> bool {
    let mut state = ExploreState::new();
    for op in ops {
        state = state.apply(op.message());
        let idx = indices(&state);
        if idx.is_empty() || !idx.windows(2).all(|pair| pair[0] < pair[1]) {
            return false;
        }
    }
    true
}

#[quickcheck]
fn slot_collection_never_goes_empty(ops: Vec<Op>) -> bool {
    let mut state = ExploreState::new();
    for op in ops {
        state = state.apply(op.message());
        if state.slot_count() == 0 {
            return false;
        }
    }
    true
}

#[quickcheck]
fn apply_is_deterministic(ops: Vec<Op>) -> bool {
    let mut left = ExploreState::new();
    let mut right = ExploreState::new();
    for op in ops {
        left = left.apply(op.message());
        right = right.apply(op.message());
    }
    left == right
}
