//! Flattened per-atom values the search works on.

use typeset_core::{Atom, Glue, Length, PENALTY_INFINITY, Penalty};

/// Which atom variant an item was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ItemKind {
    Box,
    Glue,
    Penalty,
}

/// Width, stretch, shrink, cost and flag of one atom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Item {
    pub kind: ItemKind,
    pub width: Length,
    pub stretch: Length,
    pub shrink: Length,
    pub cost: f64,
    pub flagged: bool,
}

impl Item {
    pub(crate) fn glue(glue: Glue) -> Self {
        Self {
            kind: ItemKind::Glue,
            width: glue.width,
            stretch: glue.stretch,
            shrink: glue.shrink,
            cost: 0.0,
            flagged: false,
        }
    }

    pub(crate) fn penalty(penalty: Penalty) -> Self {
        Self {
            kind: ItemKind::Penalty,
            width: penalty.width,
            stretch: 0.0,
            shrink: 0.0,
            cost: penalty.cost,
            flagged: penalty.flagged,
        }
    }

    #[inline]
    pub(crate) fn is_forced(&self) -> bool {
        self.kind == ItemKind::Penalty && self.cost <= -PENALTY_INFINITY
    }

    /// Flagged only counts for penalties.
    #[inline]
    pub(crate) fn is_flagged(&self) -> bool {
        self.kind == ItemKind::Penalty && self.flagged
    }
}

impl From<&Atom> for Item {
    fn from(atom: &Atom) -> Self {
        match atom {
            Atom::Box(layout_box) => Self {
                kind: ItemKind::Box,
                width: layout_box.width(),
                stretch: 0.0,
                shrink: 0.0,
                cost: 0.0,
                flagged: false,
            },
            Atom::Glue(glue) => Self::glue(*glue),
            Atom::Penalty(penalty) => Self::penalty(*penalty),
        }
    }
}

/// Whether a line may end at `index`.
pub(crate) fn feasible(items: &[Item], index: usize) -> bool {
    let Some(item) = items.get(index) else {
        return false;
    };
    match item.kind {
        ItemKind::Penalty => item.cost < PENALTY_INFINITY,
        ItemKind::Glue => {
            index > 0
                && items
                    .get(index - 1)
                    .is_some_and(|previous| previous.kind == ItemKind::Box)
        }
        ItemKind::Box => false,
    }
}

/// A position is feasible if it is a penalty below `+INF`, or glue directly after a box.
pub fn is_feasible_breakpoint(atoms: &[Atom], index: usize) -> bool {
    let Some(atom) = atoms.get(index) else {
        return false;
    };
    match atom {
        Atom::Penalty(penalty) => penalty.cost < PENALTY_INFINITY,
        Atom::Glue(_) => index > 0 && atoms.get(index - 1).is_some_and(Atom::is_box),
        Atom::Box(_) => false,
    }
}

/// A penalty at or below `-INF` must be broken at.
pub fn is_forced_break(atoms: &[Atom], index: usize) -> bool {
    matches!(atoms.get(index), Some(Atom::Penalty(penalty)) if penalty.is_forced())
}

/// Classify a line by its adjustment ratio: 0 tight, 1 decent, 2 loose, 3 very loose.
pub fn fitness_class(ratio: f64) -> u8 {
    if ratio < -0.5 {
        0
    } else if ratio <= 0.5 {
        1
    } else if ratio <= 1.0 {
        2
    } else {
        3
    }
}
