//! # Partial-Update Merge
//!
//! The registry has two update disciplines, kept deliberately distinct:
//!
//! - **Merge-on-existing** ([`MergePatch`]): Account and Reaction-Icon.
//!   Each mutable field is overwritten only when the patch carries a
//!   non-empty/non-zero value; omitted fields retain their stored values.
//! - **Full-validate-and-replace**: Organization and Contact. The incoming
//!   payload is re-validated and substitutes the stored document wholesale
//!   (handled in the service, not here).
//!
//! Neither discipline touches the identifier or the created timestamp.

use crate::domain::entities::{Account, ReactionIcon};
use chrono::{DateTime, Utc};

/// Merge an incoming partial payload into a stored record in place.
pub trait MergePatch {
    /// Apply `patch` on top of `self`, treating zero-valued patch fields as
    /// "not supplied". Refreshes the updated timestamp where the kind has
    /// one, regardless of whether any field changed.
    fn merge_patch(&mut self, patch: Self, now: DateTime<Utc>);
}

impl MergePatch for Account {
    fn merge_patch(&mut self, patch: Self, now: DateTime<Utc>) {
        if !patch.name.is_empty() {
            self.name = patch.name;
        }
        if !patch.color_code.is_empty() {
            self.color_code = patch.color_code;
        }
        self.updated_date = now;
    }
}

impl MergePatch for ReactionIcon {
    fn merge_patch(&mut self, patch: Self, _now: DateTime<Utc>) {
        if !patch.glyph.is_empty() {
            self.glyph = patch.glyph;
        }
        if !patch.display_name.is_empty() {
            self.display_name = patch.display_name;
        }
        if patch.icon_index != 0 {
            self.icon_index = patch.icon_index;
        }
        // created_date is immutable; the patch value is ignored.
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ids::RecordId;

    fn stored_account() -> Account {
        Account {
            id: RecordId::from_bytes([1; 12]),
            name: "Ada".into(),
            color_code: "#00ff00".into(),
            created_date: Utc::now(),
            updated_date: Utc::now(),
        }
    }

    #[test]
    fn name_only_patch_keeps_color_and_advances_updated() {
        let mut stored = stored_account();
        let before = stored.updated_date;
        let now = before + chrono::Duration::seconds(5);

        stored.merge_patch(
            Account {
                name: "Grace".into(),
                ..Account::default()
            },
            now,
        );

        assert_eq!(stored.name, "Grace");
        assert_eq!(stored.color_code, "#00ff00");
        assert_eq!(stored.updated_date, now);
    }

    #[test]
    fn empty_patch_still_advances_updated() {
        let mut stored = stored_account();
        let now = stored.updated_date + chrono::Duration::seconds(5);

        stored.merge_patch(Account::default(), now);

        assert_eq!(stored.name, "Ada");
        assert_eq!(stored.color_code, "#00ff00");
        assert_eq!(stored.updated_date, now);
    }

    #[test]
    fn patch_never_touches_id_or_created() {
        let mut stored = stored_account();
        let original_id = stored.id;
        let original_created = stored.created_date;

        stored.merge_patch(
            Account {
                id: RecordId::from_bytes([9; 12]),
                name: "Grace".into(),
                ..Account::default()
            },
            Utc::now(),
        );

        assert_eq!(stored.id, original_id);
        assert_eq!(stored.created_date, original_created);
    }

    #[test]
    fn icon_patch_merges_index_and_keeps_created() {
        let created = Utc::now();
        let mut stored = ReactionIcon {
            id: RecordId::from_bytes([2; 12]),
            glyph: "🎉".into(),
            display_name: "party".into(),
            icon_index: 3,
            created_date: created,
        };

        stored.merge_patch(
            ReactionIcon {
                icon_index: 7,
                ..ReactionIcon::default()
            },
            Utc::now(),
        );

        assert_eq!(stored.glyph, "🎉");
        assert_eq!(stored.display_name, "party");
        assert_eq!(stored.icon_index, 7);
        assert_eq!(stored.created_date, created);
    }
}
