//! Sequence and container matchers.
//!
//! Sequences are `Value::List`. Size matchers also accept maps and strings,
//! measuring entries and chars respectively. Anything else is a mismatch.

use im::Vector;

use crate::{
    description::Description,
    matcher::{IntoMatcher, Matcher, SharedMatcher},
    matchers::{all_of, primitives::equal_to, AllOf},
    value::{equivalent, Value},
};

// ============================================================================
// ORDERED CONTAINMENT
// ============================================================================

/// Matches lists of exactly the given length whose element `i` satisfies
/// matcher `i`.
#[derive(Clone)]
pub struct IsIterableContainingInOrder {
    matchers: Vec<SharedMatcher>,
}

impl Matcher for IsIterableContainingInOrder {
    fn matches(&self, actual: &Value) -> bool {
        let Some(items) = actual.as_list() else {
            return false;
        };
        items.len() == self.matchers.len()
            && items
                .iter()
                .zip(&self.matchers)
                .all(|(item, matcher)| matcher.matches(item))
    }

    fn describe_to(&self, description: &mut Description) {
        description
            .append_text("iterable containing ")
            .append_list("[", ", ", "]", &self.matchers);
    }

    fn describe_mismatch(&self, actual: &Value, description: &mut Description) {
        let Some(items) = actual.as_list() else {
            description.append_text("was ").append_value(actual);
            return;
        };
        for (index, matcher) in self.matchers.iter().enumerate() {
            match items.get(index) {
                None => {
                    description
                        .append_text(&format!("no item at index {} was ", index))
                        .append_description_of(matcher);
                    return;
                }
                Some(item) if !matcher.matches(item) => {
                    description.append_text(&format!("item {}: ", index));
                    matcher.describe_mismatch(item, description);
                    return;
                }
                Some(_) => {}
            }
        }
        if let Some(extra) = items.get(self.matchers.len()) {
            description
                .append_text("not matched: ")
                .append_value(extra)
                .append_text(&format!(" at index {}", self.matchers.len()));
        }
    }
}

/// ```rust
/// use verity::prelude::*;
/// let m = contains(vec![equal_to("a"), equal_to("b")]);
/// assert!(m.matches(&Value::list(["a", "b"])));
/// assert!(!m.matches(&Value::list(["b", "a"])));
/// ```
pub fn contains<I>(matchers: I) -> IsIterableContainingInOrder
where
    I: IntoIterator,
    I::Item: IntoMatcher,
{
    IsIterableContainingInOrder {
        matchers: matchers.into_iter().map(IntoMatcher::into_matcher).collect(),
    }
}

pub fn array_containing<I>(matchers: I) -> IsIterableContainingInOrder
where
    I: IntoIterator,
    I::Item: IntoMatcher,
{
    contains(matchers)
}

// ============================================================================
// UNORDERED CONTAINMENT
// ============================================================================

/// Result of assigning items to matchers one-to-one.
struct Assignment {
    unmatched_matchers: Vec<usize>,
    unmatched_items: Vec<usize>,
}

impl Assignment {
    fn is_perfect(&self) -> bool {
        self.unmatched_matchers.is_empty() && self.unmatched_items.is_empty()
    }
}

/// Maximum bipartite matching between matchers and items by augmenting paths.
/// Every matcher/item pair is evaluated once.
fn assign(matchers: &[SharedMatcher], items: &Vector<Value>) -> Assignment {
    let compatible: Vec<Vec<bool>> = matchers
        .iter()
        .map(|matcher| items.iter().map(|item| matcher.matches(item)).collect())
        .collect();
    let mut owner: Vec<Option<usize>> = vec![None; items.len()];
    let mut unmatched_matchers = Vec::new();
    for matcher in 0..matchers.len() {
        let mut visited = vec![false; items.len()];
        if !augment(matcher, &compatible, &mut visited, &mut owner) {
            unmatched_matchers.push(matcher);
        }
    }
    let unmatched_items = owner
        .iter()
        .enumerate()
        .filter(|(_, owner)| owner.is_none())
        .map(|(index, _)| index)
        .collect();
    Assignment {
        unmatched_matchers,
        unmatched_items,
    }
}

fn augment(
    matcher: usize,
    compatible: &[Vec<bool>],
    visited: &mut [bool],
    owner: &mut [Option<usize>],
) -> bool {
    for item in 0..visited.len() {
        if !compatible[matcher][item] || visited[item] {
            continue;
        }
        visited[item] = true;
        let free = match owner[item] {
            None => true,
            Some(previous) => augment(previous, compatible, visited, owner),
        };
        if free {
            owner[item] = Some(matcher);
            return true;
        }
    }
    false
}

/// Matches lists whose items can be paired one-to-one with the matchers, in
/// any order.
#[derive(Clone)]
pub struct IsIterableContainingInAnyOrder {
    matchers: Vec<SharedMatcher>,
}

impl Matcher for IsIterableContainingInAnyOrder {
    fn matches(&self, actual: &Value) -> bool {
        let Some(items) = actual.as_list() else {
            return false;
        };
        items.len() == self.matchers.len() && assign(&self.matchers, items).is_perfect()
    }

    fn describe_to(&self, description: &mut Description) {
        description
            .append_text("iterable over ")
            .append_list("[", ", ", "]", &self.matchers)
            .append_text(" in any order");
    }

    fn describe_mismatch(&self, actual: &Value, description: &mut Description) {
        let Some(items) = actual.as_list() else {
            description.append_text("was ").append_value(actual);
            return;
        };
        let assignment = assign(&self.matchers, items);
        if !assignment.unmatched_matchers.is_empty() {
            let missing = assignment
                .unmatched_matchers
                .iter()
                .map(|&index| &self.matchers[index]);
            description
                .append_text("no item matches: ")
                .append_list("", ", ", "", missing)
                .append_text(" in ")
                .append_value(actual);
        }
        if !assignment.unmatched_items.is_empty() {
            if !assignment.unmatched_matchers.is_empty() {
                description.append_text("; ");
            }
            let extra: Vec<&Value> = assignment
                .unmatched_items
                .iter()
                .filter_map(|&index| items.get(index))
                .collect();
            description
                .append_text("not matched: ")
                .append_value_list("", ", ", "", extra);
        }
    }
}

/// ```rust
/// use verity::prelude::*;
/// let m = contains_in_any_order(vec!["a", "b"]);
/// assert!(m.matches(&Value::list(["b", "a"])));
/// assert!(!m.matches(&Value::list(["a", "a"])));
/// ```
pub fn contains_in_any_order<I>(matchers: I) -> IsIterableContainingInAnyOrder
where
    I: IntoIterator,
    I::Item: IntoMatcher,
{
    IsIterableContainingInAnyOrder {
        matchers: matchers.into_iter().map(IntoMatcher::into_matcher).collect(),
    }
}

// ============================================================================
// MEMBERSHIP
// ============================================================================

/// Matches lists with at least one element satisfying the element matcher.
#[derive(Clone)]
pub struct IsCollectionContaining {
    element: SharedMatcher,
}

impl Matcher for IsCollectionContaining {
    fn matches(&self, actual: &Value) -> bool {
        actual
            .as_list()
            .is_some_and(|items| items.iter().any(|item| self.element.matches(item)))
    }

    fn describe_to(&self, description: &mut Description) {
        description
            .append_text("a collection containing ")
            .append_description_of(&self.element);
    }

    fn describe_mismatch(&self, actual: &Value, description: &mut Description) {
        let Some(items) = actual.as_list() else {
            description.append_text("was ").append_value(actual);
            return;
        };
        if items.is_empty() {
            description.append_text("was empty");
            return;
        }
        description.append_text("mismatches were: [");
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                description.append_text(", ");
            }
            self.element.describe_mismatch(item, description);
        }
        description.append_text("]");
    }
}

pub fn has_item(element: impl IntoMatcher) -> IsCollectionContaining {
    IsCollectionContaining {
        element: element.into_matcher(),
    }
}

/// Each matcher needs some satisfying element; elements may be shared.
pub fn has_items<I>(elements: I) -> AllOf
where
    I: IntoIterator,
    I::Item: IntoMatcher,
{
    all_of(elements.into_iter().map(has_item))
}

/// Matches lists whose every element satisfies the element matcher.
#[derive(Clone)]
pub struct Every {
    element: SharedMatcher,
}

impl Matcher for Every {
    fn matches(&self, actual: &Value) -> bool {
        actual
            .as_list()
            .is_some_and(|items| items.iter().all(|item| self.element.matches(item)))
    }

    fn describe_to(&self, description: &mut Description) {
        description
            .append_text("every item is ")
            .append_description_of(&self.element);
    }

    fn describe_mismatch(&self, actual: &Value, description: &mut Description) {
        let failing = actual
            .as_list()
            .and_then(|items| items.iter().find(|item| !self.element.matches(item)));
        match failing {
            Some(item) => {
                description.append_text("an item ");
                self.element.describe_mismatch(item, description);
            }
            None => {
                description.append_text("was ").append_value(actual);
            }
        }
    }
}

pub fn every_item(element: impl IntoMatcher) -> Every {
    Every {
        element: element.into_matcher(),
    }
}

/// Matches values equal to one of a fixed set.
#[derive(Debug, Clone)]
pub struct IsIn {
    candidates: Vec<Value>,
}

impl Matcher for IsIn {
    fn matches(&self, actual: &Value) -> bool {
        self.candidates
            .iter()
            .any(|candidate| equivalent(actual, candidate))
    }

    fn describe_to(&self, description: &mut Description) {
        description
            .append_text("one of ")
            .append_value_list("{", ", ", "}", &self.candidates);
    }
}

pub fn is_in<I>(candidates: I) -> IsIn
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    IsIn {
        candidates: candidates.into_iter().map(Into::into).collect(),
    }
}

pub fn one_of<I>(candidates: I) -> IsIn
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    is_in(candidates)
}

// ============================================================================
// SIZE
// ============================================================================

/// Applies a matcher to the materialized length of a list, map or string.
#[derive(Clone)]
pub struct HasSize {
    size: SharedMatcher,
}

impl Matcher for HasSize {
    fn matches(&self, actual: &Value) -> bool {
        actual
            .len()
            .is_some_and(|len| self.size.matches(&Value::from(len)))
    }

    fn describe_to(&self, description: &mut Description) {
        description
            .append_text("a collection with size ")
            .append_description_of(&self.size);
    }

    fn describe_mismatch(&self, actual: &Value, description: &mut Description) {
        match actual.len() {
            Some(len) => {
                description.append_text("collection size ");
                self.size.describe_mismatch(&Value::from(len), description);
            }
            None => {
                description
                    .append_text("was ")
                    .append_value(actual)
                    .append_text(", which has no size");
            }
        }
    }
}

/// Accepts a bare length or a matcher over the length.
///
/// ```rust
/// use verity::prelude::*;
/// assert!(has_size(2).matches(&Value::list([1, 2])));
/// assert!(has_size(less_than(3)).matches(&Value::from("ab")));
/// ```
pub fn has_size(size: impl IntoMatcher) -> HasSize {
    HasSize {
        size: size.into_matcher(),
    }
}

/// Matches empty lists, maps and strings.
#[derive(Debug, Clone, Copy)]
pub struct IsEmpty;

impl Matcher for IsEmpty {
    fn matches(&self, actual: &Value) -> bool {
        actual.len() == Some(0)
    }

    fn describe_to(&self, description: &mut Description) {
        description.append_text("an empty collection");
    }
}

pub fn empty() -> IsEmpty {
    IsEmpty
}

/// Matches only the empty string.
pub fn empty_string() -> crate::matchers::DescribedAs {
    crate::matchers::DescribedAs::fixed("an empty string", equal_to(""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::{describe, explain_mismatch};

    fn letters(items: &[&str]) -> Value {
        Value::list(items.iter().copied())
    }

    #[test]
    fn test_contains_requires_order_and_length() {
        let m = contains(["a", "b"]);
        assert!(m.matches(&letters(&["a", "b"])));
        assert!(!m.matches(&letters(&["b", "a"])));
        assert!(!m.matches(&letters(&["a"])));
        assert!(!m.matches(&letters(&["a", "b", "c"])));
        assert!(!m.matches(&Value::from("ab")));
        assert!(contains(Vec::<Value>::new()).matches(&Value::list(Vec::<Value>::new())));
    }

    #[test]
    fn test_contains_mismatch_pinpoints_first_failure() {
        let m = contains(["a", "b"]);
        assert_eq!(describe(&m), "iterable containing [\"a\", \"b\"]");
        assert_eq!(explain_mismatch(&m, &letters(&["a", "c"])), "item 1: was \"c\"");
        assert_eq!(explain_mismatch(&m, &letters(&["a"])), "no item at index 1 was \"b\"");
        assert_eq!(
            explain_mismatch(&m, &letters(&["a", "b", "c"])),
            "not matched: \"c\" at index 2"
        );
    }

    #[test]
    fn test_any_order_uses_one_to_one_assignment() {
        let m = contains_in_any_order(["a", "b"]);
        assert!(m.matches(&letters(&["b", "a"])));
        assert!(!m.matches(&letters(&["a", "a"])));
        assert!(!m.matches(&letters(&["a"])));
        assert!(!m.matches(&letters(&["a", "b", "b"])));
    }

    #[test]
    fn test_any_order_does_not_depend_on_greedy_choice() {
        let items = Value::list(["a", "b"]);
        let flexible = contains_in_any_order(vec![
            crate::matchers::anything().into_matcher(),
            equal_to("a").into_matcher(),
        ]);
        assert!(flexible.matches(&items));
    }

    #[test]
    fn test_any_order_handles_duplicates() {
        let m = contains_in_any_order([1, 1, 2]);
        assert!(m.matches(&Value::list([1, 2, 1])));
        assert!(!m.matches(&Value::list([1, 2, 2])));
    }

    #[test]
    fn test_any_order_mismatch_distinguishes_missing_and_extra() {
        let m = contains_in_any_order(["a", "b"]);
        assert_eq!(describe(&m), "iterable over [\"a\", \"b\"] in any order");
        assert_eq!(
            explain_mismatch(&m, &letters(&["a"])),
            "no item matches: \"b\" in [\"a\"]"
        );
        assert_eq!(
            explain_mismatch(&m, &letters(&["a", "b", "c"])),
            "not matched: \"c\""
        );
        assert_eq!(
            explain_mismatch(&m, &letters(&["a", "a"])),
            "no item matches: \"b\" in [\"a\", \"a\"]; not matched: \"a\""
        );
    }

    #[test]
    fn test_has_item() {
        let m = has_item(equal_to(3));
        assert!(m.matches(&Value::list([1, 2, 3])));
        assert!(!m.matches(&Value::list([1, 2, 4])));
        assert_eq!(describe(&m), "a collection containing 3");
        assert_eq!(
            explain_mismatch(&m, &Value::list([1, 2])),
            "mismatches were: [was 1, was 2]"
        );
        assert_eq!(explain_mismatch(&m, &Value::list(Vec::<i32>::new())), "was empty");
    }

    #[test]
    fn test_has_items_is_not_positional() {
        let m = has_items([3, 1]);
        assert!(m.matches(&Value::list([1, 2, 3])));
        assert!(has_items([1, 1]).matches(&Value::list([1])));
        assert!(!m.matches(&Value::list([1, 2])));
        assert_eq!(explain_mismatch(&m, &Value::list([1])), "mismatches were: [was 1]");
    }

    #[test]
    fn test_every_item() {
        let m = every_item(crate::matchers::greater_than(0));
        assert!(m.matches(&Value::list([1, 2])));
        assert!(m.matches(&Value::list(Vec::<i32>::new())));
        assert!(!m.matches(&Value::list([1, -2])));
        assert_eq!(explain_mismatch(&m, &Value::list([1, -2])), "an item -2 was less than 0");
    }

    #[test]
    fn test_is_in() {
        let m = is_in([1, 2, 3]);
        assert!(m.matches(&Value::from(2)));
        assert!(!m.matches(&Value::from(4)));
        assert_eq!(describe(&m), "one of {1, 2, 3}");
    }

    #[test]
    fn test_size_and_emptiness() {
        assert!(has_size(2).matches(&Value::map([("a", 1), ("b", 2)])));
        assert!(has_size(3).matches(&Value::from("abc")));
        assert!(!has_size(1).matches(&Value::from(1)));
        assert_eq!(describe(&has_size(2)), "a collection with size 2");
        assert_eq!(explain_mismatch(&has_size(2), &Value::list([1])), "collection size was 1");
        assert_eq!(explain_mismatch(&has_size(2), &Value::from(1)), "was 1, which has no size");
        assert!(empty().matches(&Value::list(Vec::<i32>::new())));
        assert!(empty().matches(&Value::from("")));
        assert!(!empty().matches(&Value::list([1])));
        assert!(empty_string().matches(&Value::from("")));
        assert!(!empty_string().matches(&Value::list(Vec::<i32>::new())));
        assert_eq!(describe(&empty_string()), "an empty string");
    }
}
