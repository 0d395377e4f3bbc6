//! Partial update descriptors.
//!
//! # Responsibility
//! - Distinguish "leave unchanged" from "clear" from "set" per optional field.
//! - Describe one `TrendStore::update_item` call.

/// Tri-state update for one optional field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldUpdate<T> {
    /// Field is not touched.
    #[default]
    Unchanged,
    /// Field is set to absent.
    Clear,
    /// Field is overwritten with the value.
    Set(T),
}

impl<T> FieldUpdate<T> {
    /// Builds an explicit update from an optional value: `None` clears.
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Set(value),
            None => Self::Clear,
        }
    }

    /// Applies the update to `target` and reports whether its value changed.
    pub fn apply_to(self, target: &mut Option<T>) -> bool
    where
        T: PartialEq,
    {
        let next = match self {
            Self::Unchanged => return false,
            Self::Clear => None,
            Self::Set(value) => Some(value),
        };
        if *target == next {
            return false;
        }
        *target = next;
        true
    }
}

/// Partial update for one trend item.
///
/// `tags: None` means "no change"; `Some(vec![])` clears all tags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemUpdate {
    pub tags: Option<Vec<String>>,
    pub source: FieldUpdate<String>,
    pub note: FieldUpdate<String>,
}

#[cfg(test)]
mod tests {
    use super::FieldUpdate;

    #[test]
    fn unchanged_leaves_target_alone() {
        let mut value = Some("kept".to_string());
        assert!(!FieldUpdate::Unchanged.apply_to(&mut value));
        assert_eq!(value.as_deref(), Some("kept"));
    }

    #[test]
    fn clear_and_set_report_actual_changes_only() {
        let mut value: Option<String> = None;
        assert!(!FieldUpdate::Clear.apply_to(&mut value));
        assert!(FieldUpdate::Set("x".to_string()).apply_to(&mut value));
        assert!(!FieldUpdate::Set("x".to_string()).apply_to(&mut value));
        assert!(FieldUpdate::Clear.apply_to(&mut value));
        assert_eq!(value, None);
    }

    #[test]
    fn from_option_maps_none_to_clear() {
        assert_eq!(FieldUpdate::<String>::from_option(None), FieldUpdate::Clear);
        assert_eq!(FieldUpdate::from_option(Some(1)), FieldUpdate::Set(1));
    }
}
