/// List helpers: client-side sorting, sort indicators and a debounced search box.
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use std::cmp::Ordering;

const SEARCH_DEBOUNCE_MS: u32 = 300;

pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// `None` sorts after every value.
pub fn cmp_opt<T: Ord>(a: &Option<T>, b: &Option<T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    pub field: &'static str,
    pub ascending: bool,
}

impl SortState {
    pub fn new(field: &'static str) -> Self {
        Self {
            field,
            ascending: true,
        }
    }

    /// Same field flips the direction, another field starts ascending.
    pub fn toggle(&mut self, field: &'static str) {
        if self.field == field {
            self.ascending = !self.ascending;
        } else {
            self.field = field;
            self.ascending = true;
        }
    }

    pub fn indicator(&self, field: &str) -> &'static str {
        get_sort_indicator(self.field, field, self.ascending)
    }
}

pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

/// Replaces the row with the same key or, for a new key, inserts at the top.
/// Returns `true` when the row was inserted.
pub fn upsert_by<T, K: PartialEq>(items: &mut Vec<T>, item: T, key: impl Fn(&T) -> K) -> bool {
    let item_key = key(&item);
    match items.iter_mut().find(|existing| key(existing) == item_key) {
        Some(existing) => {
            *existing = item;
            false
        }
        None => {
            items.insert(0, item);
            true
        }
    }
}

/// Drops every row whose key is in `keys`; returns how many were removed.
pub fn remove_by<T, K: PartialEq>(items: &mut Vec<T>, keys: &[K], key: impl Fn(&T) -> K) -> usize {
    let before = items.len();
    items.retain(|item| !keys.contains(&key(item)));
    before - items.len()
}

/// Browser confirm dialog; `false` when there is no window.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Text input that reports its value after the user stops typing.
#[component]
pub fn SearchInput(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    let (input_value, set_input_value) = signal(value.get_untracked());
    let pending = StoredValue::new_local(None::<Timeout>);

    let handle_input = move |new_value: String| {
        set_input_value.set(new_value.clone());
        let timeout = Timeout::new(SEARCH_DEBOUNCE_MS, move || on_change.run(new_value));
        // dropping the previous Timeout cancels it
        pending.set_value(Some(timeout));
    };

    let clear = move |_| {
        pending.set_value(None);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                placeholder=placeholder
                class:search-input__field--active=move || !value.get().trim().is_empty()
                class="search-input__field"
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" on:click=clear title="Clear">
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Row(&'static str, Option<i32>);

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "name" => self.0.cmp(other.0),
                "value" => cmp_opt(&self.1, &other.1),
                _ => Ordering::Equal,
            }
        }
    }

    #[test]
    fn test_sort_list() {
        let mut rows = vec![Row("b", None), Row("a", Some(2)), Row("c", Some(1))];
        sort_list(&mut rows, "value", true);
        assert_eq!(rows, vec![Row("c", Some(1)), Row("a", Some(2)), Row("b", None)]);
        sort_list(&mut rows, "name", false);
        assert_eq!(rows[0], Row("c", Some(1)));
    }

    #[test]
    fn test_upsert_and_remove() {
        let mut rows = vec![(1, "a"), (2, "b")];
        assert!(!upsert_by(&mut rows, (2, "B"), |r| r.0));
        assert_eq!(rows, vec![(1, "a"), (2, "B")]);
        assert!(upsert_by(&mut rows, (3, "c"), |r| r.0));
        assert_eq!(rows[0], (3, "c"));
        assert_eq!(remove_by(&mut rows, &[1, 3, 9], |r| r.0), 2);
        assert_eq!(rows, vec![(2, "B")]);
    }

    #[test]
    fn test_sort_state_toggle() {
        let mut sort = SortState::new("name");
        sort.toggle("name");
        assert!(!sort.ascending);
        assert_eq!(sort.indicator("name"), " ▼");
        sort.toggle("value");
        assert_eq!(sort, SortState::new("value"));
        assert_eq!(sort.indicator("name"), " ⇅");
    }
}
