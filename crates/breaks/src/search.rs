//! The breakpoint search itself.

use crate::error::BreakError;
use crate::item::{Item, ItemKind, feasible, fitness_class};
use crate::params::{BreakParams, OverflowPolicy};
use log::{debug, trace, warn};
use smallvec::SmallVec;
use tracing::info_span;
use typeset_core::{Atom, Glue, Length, Penalty};

/// Running totals of width, stretch and shrink.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Totals {
    width: Length,
    stretch: Length,
    shrink: Length,
}

/// A breakpoint record in the search arena.
#[derive(Debug, Clone, Copy)]
struct BreakNode {
    /// Index of the atom the line ends at.
    position: usize,
    /// First atom of the following line (discardable atoms skipped).
    start: usize,
    /// Number of lines before this break.
    line: usize,
    fitness: u8,
    /// Totals of every atom before `start`.
    totals: Totals,
    /// Demerits accumulated along the chain ending here.
    demerits: f64,
    /// Adjustment ratio of the line ending here.
    ratio: f64,
    previous: Option<usize>,
    /// Set on rescue breaks and every node built on one.
    rescued: bool,
}

/// Identity of a candidate breakpoint for deduplication and inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CandidateKey {
    pub position: usize,
    pub line: usize,
    pub fitness: u8,
}

/// One line of the chosen solution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSpan {
    /// First atom on the line.
    pub start: usize,
    /// Atom the line breaks at (exclusive end).
    pub end: usize,
    /// Adjustment ratio the line needs to reach its target width.
    pub ratio: f64,
    pub fitness: u8,
    /// Demerits contributed by this line alone.
    pub demerits: f64,
}

/// Result of a search.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Breaks {
    /// Strictly increasing break positions.
    pub positions: Vec<usize>,
    pub lines: Vec<LineSpan>,
    /// Total demerits of the chosen chain.
    pub demerits: f64,
    /// Every candidate reachable through feasible lines alone, in creation order.
    pub candidates: Vec<CandidateKey>,
    /// Rescue breaks and the candidates built on them, in creation order.
    pub rescued_candidates: Vec<CandidateKey>,
    /// Breaks that were forced by `OverflowPolicy::Rescue`.
    pub rescued: usize,
}

/// Adjustment ratio of a line of natural width `actual` set to `target`.
///
/// Positive ratios stretch, negative ratios shrink. Without stretch (or
/// shrink) the ratio saturates to `+inf` (or `-inf`).
pub fn adjustment_ratio(actual: Length, target: Length, stretch: Length, shrink: Length) -> f64 {
    if actual < target {
        if stretch > 0.0 {
            (target - actual) / stretch
        } else {
            f64::INFINITY
        }
    } else if actual > target {
        if shrink > 0.0 {
            (target - actual) / shrink
        } else {
            f64::NEG_INFINITY
        }
    } else {
        0.0
    }
}

/// Optimal line breaker over a borrowed atom sequence.
#[derive(Debug, Clone, Copy)]
pub struct LineBreaker<'atoms> {
    atoms: &'atoms [Atom],
    params: BreakParams,
    closed: bool,
}

impl<'atoms> LineBreaker<'atoms> {
    #[inline]
    pub const fn new(atoms: &'atoms [Atom], params: BreakParams) -> Self {
        Self {
            atoms,
            params,
            closed: false,
        }
    }

    /// Treat the sequence as a finished paragraph.
    ///
    /// Unless it already ends in a forced break, the search appends a
    /// forbidden penalty, fill glue and a forced break after the last atom.
    /// Those virtual atoms never appear in the returned positions.
    #[inline]
    #[must_use]
    pub const fn closed(mut self) -> Self {
        self.closed = true;
        self
    }

    #[inline]
    pub const fn params(&self) -> &BreakParams {
        &self.params
    }

    /// Break positions only.
    ///
    /// # Errors
    /// See [`LineBreaker::compute_lines`].
    pub fn compute_breaks(&self, line_lengths: &[Length]) -> Result<Vec<usize>, BreakError> {
        Ok(self.compute_lines(line_lengths)?.positions)
    }

    /// Run the search and describe every chosen line.
    ///
    /// # Errors
    /// Returns `BreakError::NoLineLengths` for a non-empty sequence without
    /// line lengths, and `BreakError::NoFeasibleBreak` when the overflow policy
    /// is `Fail` and no breakpoint can reach some position.
    pub fn compute_lines(&self, line_lengths: &[Length]) -> Result<Breaks, BreakError> {
        if self.atoms.is_empty() {
            return Ok(Breaks::default());
        }
        if line_lengths.is_empty() {
            return Err(BreakError::NoLineLengths);
        }
        let _span = info_span!("breaks.compute", atoms = self.atoms.len()).entered();

        let items = self.items();
        let mut search = Search::new(&items, line_lengths, self.params);
        for index in 0..items.len() {
            if feasible(&items, index) {
                search.evaluate(index)?;
            }
        }
        Ok(search.finish(self.atoms.len()))
    }

    fn items(&self) -> Vec<Item> {
        let mut items: Vec<Item> = self.atoms.iter().map(Item::from).collect();
        let ends_forced = items.last().is_some_and(Item::is_forced);
        if self.closed && !ends_forced {
            items.push(Item::penalty(Penalty::forbidden()));
            items.push(Item::glue(Glue::fill()));
            items.push(Item::penalty(Penalty::forced()));
        }
        items
    }
}

/// Mutable state of one search; lives only for the duration of a call.
struct Search<'items> {
    items: &'items [Item],
    line_lengths: &'items [Length],
    params: BreakParams,
    /// `sums[i]` holds the totals of `items[..i]`.
    sums: Vec<Totals>,
    arena: Vec<BreakNode>,
    /// Arena handles, ordered by line.
    active: Vec<usize>,
    candidates: Vec<CandidateKey>,
    rescued_candidates: Vec<CandidateKey>,
    rescued: usize,
}

impl<'items> Search<'items> {
    fn new(items: &'items [Item], line_lengths: &'items [Length], params: BreakParams) -> Self {
        let mut sums = Vec::with_capacity(items.len() + 1);
        let mut running = Totals::default();
        sums.push(running);
        for item in items {
            running.width += item.width;
            running.stretch += item.stretch;
            running.shrink += item.shrink;
            sums.push(running);
        }

        let origin = BreakNode {
            position: 0,
            start: 0,
            line: 0,
            fitness: 1,
            totals: Totals::default(),
            demerits: 0.0,
            ratio: 0.0,
            previous: None,
            rescued: false,
        };

        Self {
            items,
            line_lengths,
            params,
            sums,
            arena: vec![origin],
            active: vec![0],
            candidates: Vec::new(),
            rescued_candidates: Vec::new(),
            rescued: 0,
        }
    }

    /// Consider breaking at the feasible position `index` from every active node.
    fn evaluate(&mut self, index: usize) -> Result<(), BreakError> {
        let forced = self.items[index].is_forced();
        let mut fresh: SmallVec<[BreakNode; 4]> = SmallVec::new();
        let mut dropped: SmallVec<[usize; 4]> = SmallVec::new();

        let mut slot = 0;
        while slot < self.active.len() {
            let handle = self.active[slot];
            let node = self.arena[handle];
            // The line would be empty or run backwards.
            if index <= node.position || index < node.start {
                slot += 1;
                continue;
            }

            let ratio = self.ratio(&node, index);
            if -1.0 <= ratio && ratio <= self.params.tolerance {
                let candidate = self.candidate(handle, &node, index, ratio);
                trace!(
                    target: "typeset_breaks",
                    "candidate at {index} from {}: ratio {ratio:.3}, demerits {:.1}",
                    node.position,
                    candidate.demerits
                );
                self.log_candidate(&candidate);
                fresh.push(candidate);
            }

            // Recorded first, dropped second: a forced break may still start from here.
            if ratio < -1.0 || forced {
                dropped.push(handle);
                self.active.remove(slot);
            } else {
                slot += 1;
            }
        }

        let stranded = fresh.is_empty() && (forced || self.active.is_empty());
        if stranded && !dropped.is_empty() {
            match self.params.overflow {
                OverflowPolicy::Fail => {
                    return Err(BreakError::NoFeasibleBreak { position: index });
                }
                OverflowPolicy::Rescue => {
                    if let Some(rescue) = self.rescue(&dropped, index) {
                        fresh.push(rescue);
                    }
                }
            }
        }

        for candidate in fresh {
            self.activate(candidate);
        }
        Ok(())
    }

    fn log_candidate(&mut self, node: &BreakNode) {
        let key = CandidateKey {
            position: node.position,
            line: node.line,
            fitness: node.fitness,
        };
        if node.rescued {
            self.rescued_candidates.push(key);
        } else {
            self.candidates.push(key);
        }
    }

    fn line_length(&self, line: usize) -> Length {
        self.line_lengths
            .get(line)
            .or_else(|| self.line_lengths.last())
            .copied()
            .unwrap_or_default()
    }

    fn ratio(&self, node: &BreakNode, index: usize) -> f64 {
        let item = &self.items[index];
        let sums = &self.sums[index];
        let mut width = sums.width - node.totals.width;
        if item.kind == ItemKind::Penalty {
            width += item.width;
        }
        let stretch = sums.stretch - node.totals.stretch;
        let shrink = sums.shrink - node.totals.shrink;
        adjustment_ratio(width, self.line_length(node.line), stretch, shrink)
    }

    /// First atom of the line following a break at `index`.
    fn line_start(&self, index: usize) -> usize {
        let mut cursor = index;
        while let Some(item) = self.items.get(cursor) {
            match item.kind {
                ItemKind::Box => break,
                ItemKind::Penalty if cursor > index && item.is_forced() => break,
                ItemKind::Glue | ItemKind::Penalty => cursor += 1,
            }
        }
        cursor
    }

    /// Demerits of the line from `node` to `index` alone.
    fn line_demerits(&self, node: &BreakNode, index: usize, ratio: f64, fitness: u8) -> f64 {
        let item = &self.items[index];
        let badness = 100.0 * ratio.abs().powi(3);
        let mut demerits = if item.cost >= 0.0 {
            (1.0 + badness + item.cost).powi(3)
        } else if item.is_forced() {
            (1.0 + badness).powi(2) - item.cost.powi(2)
        } else {
            (1.0 + badness).powi(2)
        };

        let origin_flagged =
            node.previous.is_some() && self.items.get(node.position).is_some_and(Item::is_flagged);
        if item.is_flagged() && origin_flagged {
            demerits += self.params.flagged_demerit;
        }
        if fitness.abs_diff(node.fitness) > 1 {
            demerits += self.params.fitness_demerit;
        }
        demerits
    }

    fn candidate(&self, handle: usize, node: &BreakNode, index: usize, ratio: f64) -> BreakNode {
        let fitness = fitness_class(ratio);
        let start = self.line_start(index);
        BreakNode {
            position: index,
            start,
            line: node.line + 1,
            fitness,
            totals: self.sums[start],
            demerits: node.demerits + self.line_demerits(node, index, ratio, fitness),
            ratio,
            previous: Some(handle),
            rescued: node.rescued,
        }
    }

    /// Break at `index` from the cheapest dropped node, however bad the line.
    fn rescue(&mut self, dropped: &[usize], index: usize) -> Option<BreakNode> {
        let handle = dropped.iter().copied().min_by(|&left, &right| {
            self.arena[left].demerits.total_cmp(&self.arena[right].demerits)
        })?;
        let node = self.arena[handle];
        let ratio = self.ratio(&node, index);
        let upper = self.params.tolerance.max(-1.0);
        let clamped = if ratio.is_nan() { 0.0 } else { ratio.clamp(-1.0, upper) };
        warn!(
            target: "typeset_breaks",
            "no feasible line reaches position {index}; forcing a break from {} (ratio {ratio:.3})",
            node.position
        );
        self.rescued += 1;
        let mut rescue = self.candidate(handle, &node, index, clamped);
        rescue.ratio = ratio;
        rescue.rescued = true;
        self.log_candidate(&rescue);
        Some(rescue)
    }

    /// Insert a node into the active set unless an equivalent one is already there.
    fn activate(&mut self, node: BreakNode) {
        let insert_at = self
            .active
            .iter()
            .position(|&handle| self.arena[handle].line > node.line)
            .unwrap_or(self.active.len());
        let duplicate = self.active[..insert_at].iter().any(|&handle| {
            let existing = &self.arena[handle];
            existing.line == node.line
                && existing.fitness == node.fitness
                && existing.position == node.position
        });
        if duplicate {
            trace!(
                target: "typeset_breaks",
                "dropping duplicate breakpoint at {} (line {}, fitness {})",
                node.position,
                node.line,
                node.fitness
            );
            return;
        }
        self.arena.push(node);
        self.active.insert(insert_at, self.arena.len() - 1);
    }

    /// Pick the cheapest active node and walk its chain back to the start.
    fn finish(self, atom_count: usize) -> Breaks {
        let best = self.active.iter().copied().min_by(|&left, &right| {
            self.arena[left].demerits.total_cmp(&self.arena[right].demerits)
        });

        let mut chain = Vec::new();
        let mut cursor = best;
        while let Some(handle) = cursor {
            let node = &self.arena[handle];
            if node.previous.is_none() {
                break;
            }
            chain.push(handle);
            cursor = node.previous;
        }
        chain.reverse();

        let mut positions = Vec::with_capacity(chain.len());
        let mut lines = Vec::with_capacity(chain.len());
        for handle in chain {
            let node = &self.arena[handle];
            let Some(previous) = node.previous.map(|prev| &self.arena[prev]) else {
                continue;
            };
            if node.position < atom_count {
                positions.push(node.position);
            }
            lines.push(LineSpan {
                start: previous.start.min(atom_count),
                end: node.position.min(atom_count),
                ratio: node.ratio,
                fitness: node.fitness,
                demerits: node.demerits - previous.demerits,
            });
        }

        debug!(
            target: "typeset_breaks",
            "search finished: {} items, {} breakpoints created, {} active, {} lines, {} rescued",
            self.items.len(),
            self.arena.len(),
            self.active.len(),
            lines.len(),
            self.rescued
        );

        Breaks {
            positions,
            lines,
            demerits: best.map_or(0.0, |handle| self.arena[handle].demerits),
            candidates: self.candidates,
            rescued_candidates: self.rescued_candidates,
            rescued: self.rescued,
        }
    }
}
