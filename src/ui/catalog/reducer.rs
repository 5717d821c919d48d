use crate::catalog::filter_titles;
use crate::ui::catalog::intent::CatalogIntent;
use crate::ui::catalog::state::{CatalogState, FetchState};
use crate::ui::mvi::Reducer;

/// Pure state transitions for the catalog screen.
///
/// Invariants maintained:
/// - `Pending` moves to `Loaded` or `Failed` exactly once; later fetch
///   intents are ignored.
/// - `filtered` is recomputed on payload arrival and on every query edit,
///   and is always an order-preserving subsequence of the payload.
/// - `selected` stays within the filtered list.
pub struct CatalogReducer;

impl Reducer for CatalogReducer {
    type State = CatalogState;
    type Intent = CatalogIntent;

    fn reduce(mut state: CatalogState, intent: CatalogIntent) -> CatalogState {
        match intent {
            CatalogIntent::Loaded { books } => {
                if state.fetch.is_terminal() {
                    return state;
                }
                state.fetch = FetchState::Loaded { books };
                refilter(&mut state);
            }
            CatalogIntent::Failed { message } => {
                if state.fetch.is_terminal() {
                    return state;
                }
                state.fetch = FetchState::Failed { message };
            }
            CatalogIntent::PushChar(ch) => {
                state.query.push(ch);
                refilter(&mut state);
            }
            CatalogIntent::PopChar => {
                state.query.pop();
                refilter(&mut state);
            }
            CatalogIntent::ClearQuery => {
                state.query.clear();
                refilter(&mut state);
            }
            CatalogIntent::ToggleLanguage => {
                state.language = state.language.toggle();
            }
            CatalogIntent::MoveSelection(delta) => {
                state.selected = step_selection(state.selected, delta, state.filtered.len());
            }
        }
        state
    }
}

fn refilter(state: &mut CatalogState) {
    state.filtered = filter_titles(state.books(), &state.query);
    state.selected = clamp_selection(state.selected, state.filtered.len());
}

fn clamp_selection(selected: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        selected.min(len - 1)
    }
}

fn step_selection(selected: usize, delta: i32, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let current = selected.min(len - 1) as i64;
    let next = (current + delta as i64).clamp(0, len as i64 - 1);
    next as usize
}
