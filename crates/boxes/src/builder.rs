//! Turning plain text into a run of atoms.

use crate::text_box::TextBox;
use typeset_core::{Atom, Glue, Style, TextMeasure};

/// Split `text` on whitespace into word boxes separated by interword glue.
///
/// The glue has the measured space as natural width, half of it as stretch
/// and a third of it as shrink.
pub fn words_to_atoms(text: &str, style: &Style, measure: &dyn TextMeasure) -> Vec<Atom> {
    let space = measure.measure(" ", style).space;
    let interword = Glue::new(space, space / 2.0, space / 3.0);

    let mut atoms = Vec::new();
    for word in text.split_whitespace() {
        if !atoms.is_empty() {
            atoms.push(Atom::Glue(interword));
        }
        atoms.push(Atom::boxed(TextBox::new(word, style.clone(), measure)));
    }
    atoms
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::FixedAdvanceMeasure;

    /// Words become boxes with glue only between them.
    ///
    /// # Panics
    /// Panics if the atom kinds or glue values are wrong.
    #[test]
    fn alternates_words_and_glue() {
        let atoms = words_to_atoms(
            "  the quick\n brown ",
            &Style::default(),
            &FixedAdvanceMeasure::default(),
        );
        let kinds: Vec<bool> = atoms.iter().map(Atom::is_box).collect();
        assert_eq!(kinds, vec![true, false, true, false, true]);
        assert!((atoms[1].width() - 3.0).abs() < f64::EPSILON);
        assert!((atoms[1].stretch() - 1.5).abs() < f64::EPSILON);
        assert!((atoms[1].shrink() - 1.0).abs() < f64::EPSILON);
    }

    /// Blank input yields no atoms.
    ///
    /// # Panics
    /// Panics if atoms are produced.
    #[test]
    fn blank_text_is_empty() {
        let atoms = words_to_atoms(" \t\n", &Style::default(), &FixedAdvanceMeasure::default());
        assert!(atoms.is_empty());
    }
}
