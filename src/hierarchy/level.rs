use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One level of the administrative hierarchy, ordered from the root down.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    State,
    Division,
    Parliament,
    Assembly,
    Block,
    Booth,
}

impl Level {
    /// All levels, root first.
    pub const ALL: [Level; 6] = [
        Level::State,
        Level::Division,
        Level::Parliament,
        Level::Assembly,
        Level::Block,
        Level::Booth,
    ];

    /// Position of the level, `0` for the root.
    pub fn depth(self) -> usize {
        self as usize
    }

    /// Level directly above, `None` for the root.
    pub fn parent(self) -> Option<Level> {
        self.depth().checked_sub(1).map(|i| Self::ALL[i])
    }

    /// Level directly below, `None` for booths.
    pub fn child(self) -> Option<Level> {
        Self::ALL.get(self.depth() + 1).copied()
    }

    /// Every level below this one, nearest first.
    pub fn descendants(self) -> &'static [Level] {
        &Self::ALL[self.depth() + 1..]
    }

    /// Human readable name used in messages, e.g. `"Block not found"`.
    pub fn label(self) -> &'static str {
        match self {
            Level::State => "State",
            Level::Division => "Division",
            Level::Parliament => "Parliament",
            Level::Assembly => "Assembly",
            Level::Block => "Block",
            Level::Booth => "Booth",
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::Level;

    #[test]
    fn root_has_no_parent_and_booth_has_no_child() {
        assert_eq!(Level::State.parent(), None);
        assert_eq!(Level::Booth.child(), None);
    }

    #[test]
    fn parent_and_child_are_inverse() {
        for level in Level::ALL {
            if let Some(child) = level.child() {
                assert_eq!(child.parent(), Some(level));
            }
        }
    }

    #[test]
    fn descendants_are_nearest_first() {
        assert_eq!(
            Level::Assembly.descendants(),
            &[Level::Block, Level::Booth]
        );
        assert!(Level::Booth.descendants().is_empty());
        assert_eq!(Level::State.descendants().len(), 5);
    }

    #[test]
    fn levels_order_from_root_down() {
        assert!(Level::State < Level::Division);
        assert!(Level::Block < Level::Booth);
    }
}
