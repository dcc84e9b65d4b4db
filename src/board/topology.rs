//! Board topology: positions, triples, adjacency, selection.
//!
//! ```text
//! 0----------1----------2
//! |   8------9------10  |
//! |   |  16--17--18  |  |
//! 7  15  23      19  11 3
//! |   |  22--21--20  |  |
//! |   14-----13-----12  |
//! 6----------5----------4
//! ```
//!
//! Each ring is built clockwise from its top-left corner as four triples
//! (top, right, bottom, left). The four connector triples then link the
//! midpoints of the rings: {1,9,17}, {3,11,19}, {5,13,21}, {7,15,23}.
//! Adjacency follows the triples: the middle position of every triple is
//! linked to both ends.

use serde::Serialize;
use smallvec::SmallVec;

use crate::core::{Color, PositionId, TripleId, POSITION_COUNT, TRIPLE_COUNT};

/// Number of concentric rings.
const RING_COUNT: usize = 3;

/// Sides per ring.
const SIDES: usize = 4;

/// Grid distance between neighbors on the outer ring. Each inner ring
/// shrinks it by one.
const OUTER_SPACING: i8 = 3;

/// Direction the builder walks along one side of a ring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    const ALL: [Side; SIDES] = [Side::Top, Side::Right, Side::Bottom, Side::Left];

    /// Unit step taken while walking this side clockwise.
    const fn step(self) -> (i8, i8) {
        match self {
            Side::Top => (1, 0),
            Side::Right => (0, 1),
            Side::Bottom => (-1, 0),
            Side::Left => (0, -1),
        }
    }
}

/// One intersection on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Position {
    id: PositionId,
    x: i8,
    y: i8,
    occupant: Option<Color>,
    selected: bool,
    neighbors: SmallVec<[PositionId; 4]>,
    triples: SmallVec<[TripleId; 2]>,
}

impl Position {
    fn new(id: PositionId, x: i8, y: i8) -> Self {
        Self {
            id,
            x,
            y,
            occupant: None,
            selected: false,
            neighbors: SmallVec::new(),
            triples: SmallVec::new(),
        }
    }

    /// Stable index of this position.
    #[must_use]
    pub fn id(&self) -> PositionId {
        self.id
    }

    /// Grid coordinate assigned at construction.
    #[must_use]
    pub fn coords(&self) -> (i8, i8) {
        (self.x, self.y)
    }

    /// Color of the token here, if any.
    #[must_use]
    pub fn occupant(&self) -> Option<Color> {
        self.occupant
    }

    /// Check whether no token is here.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }

    /// Check whether this is the selected position.
    #[must_use]
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Adjacent positions, in the order the links were built.
    #[must_use]
    pub fn neighbors(&self) -> &[PositionId] {
        &self.neighbors
    }

    /// Triples this position belongs to (one or two).
    #[must_use]
    pub fn triples(&self) -> &[TripleId] {
        &self.triples
    }
}

/// Three positions in a straight line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Triple {
    id: TripleId,
    positions: [PositionId; 3],
}

impl Triple {
    /// Stable index of this triple.
    #[must_use]
    pub fn id(&self) -> TripleId {
        self.id
    }

    /// The three positions, end, middle, end.
    #[must_use]
    pub fn positions(&self) -> [PositionId; 3] {
        self.positions
    }

    /// Check whether `position` is on this line.
    #[must_use]
    pub fn contains(&self, position: PositionId) -> bool {
        self.positions.contains(&position)
    }
}

/// Builds the fixed board graph.
///
/// Index counters live in the builder, so every build numbers positions
/// and triples from zero in the same order.
#[derive(Debug, Default)]
pub struct TopologyBuilder {
    positions: Vec<Position>,
    triples: Vec<Triple>,
    next_position: u8,
    next_triple: u8,
}

impl TopologyBuilder {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            positions: Vec::with_capacity(POSITION_COUNT),
            triples: Vec::with_capacity(TRIPLE_COUNT),
            next_position: 0,
            next_triple: 0,
        }
    }

    /// Build the board: rings first, then connectors.
    #[must_use]
    pub fn build(mut self) -> Board {
        for ring in 0..RING_COUNT {
            let spacing = OUTER_SPACING - ring as i8;
            let top_left = self.create_position(ring as i8, ring as i8);

            let mut first = top_left;
            for side in Side::ALL {
                let second = self.step_from(first, side, spacing);
                // The left side closes the ring back at the corner.
                let third = if side == Side::Left {
                    top_left
                } else {
                    self.step_from(second, side, spacing)
                };
                self.add_triple([first, second, third]);
                first = third;
            }
        }

        for side in 0..SIDES {
            let midpoints = [0, 1, 2].map(|ring| self.triples[ring * SIDES + side].positions[1]);
            self.add_triple(midpoints);
        }

        debug_assert_eq!(self.positions.len(), POSITION_COUNT);
        debug_assert_eq!(self.triples.len(), TRIPLE_COUNT);

        Board {
            positions: self.positions,
            triples: self.triples,
            selected: None,
        }
    }

    fn create_position(&mut self, x: i8, y: i8) -> PositionId {
        let id = PositionId::new(self.next_position);
        self.next_position += 1;
        self.positions.push(Position::new(id, x, y));
        id
    }

    fn step_from(&mut self, from: PositionId, side: Side, spacing: i8) -> PositionId {
        let (dx, dy) = side.step();
        let origin = &self.positions[from.index()];
        let (x, y) = (origin.x + dx * spacing, origin.y + dy * spacing);
        self.create_position(x, y)
    }

    fn add_triple(&mut self, positions: [PositionId; 3]) {
        let id = TripleId::new(self.next_triple);
        self.next_triple += 1;

        let [first, second, third] = positions;
        self.link(second, first);
        self.link(second, third);

        for position in positions {
            self.positions[position.index()].triples.push(id);
        }
        self.triples.push(Triple { id, positions });
    }

    fn link(&mut self, a: PositionId, b: PositionId) {
        self.positions[a.index()].neighbors.push(b);
        self.positions[b.index()].neighbors.push(a);
    }
}

/// The board: 24 positions, 16 triples, and at most one selected position.
///
/// Topology is fixed after construction. Occupancy and selection change
/// only through the command layer and the session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Board {
    positions: Vec<Position>,
    triples: Vec<Triple>,
    selected: Option<PositionId>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Build a fresh, empty board.
    #[must_use]
    pub fn new() -> Self {
        TopologyBuilder::new().build()
    }

    /// Discard occupancy and selection by rebuilding from scratch.
    pub fn reset(&mut self) {
        *self = TopologyBuilder::new().build();
    }

    // === Topology ===

    /// All positions in index order.
    #[must_use]
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// All triples in construction order.
    #[must_use]
    pub fn triples(&self) -> &[Triple] {
        &self.triples
    }

    /// Look up a position by raw index. `None` if out of range.
    #[must_use]
    pub fn position_at(&self, index: usize) -> Option<&Position> {
        self.positions.get(index)
    }

    /// Look up a position by ID. `None` if out of range.
    #[must_use]
    pub fn position(&self, id: PositionId) -> Option<&Position> {
        self.position_at(id.index())
    }

    /// Look up the position at a grid coordinate.
    #[must_use]
    pub fn position_at_coords(&self, x: i8, y: i8) -> Option<PositionId> {
        self.positions
            .iter()
            .find(|p| p.coords() == (x, y))
            .map(Position::id)
    }

    /// Look up a triple by ID.
    #[must_use]
    pub fn triple(&self, id: TripleId) -> Option<&Triple> {
        self.triples.get(id.index())
    }

    /// Adjacent positions. Empty for an unknown ID.
    #[must_use]
    pub fn neighbors(&self, id: PositionId) -> &[PositionId] {
        match self.position(id) {
            Some(position) => position.neighbors(),
            None => &[],
        }
    }

    /// Check whether two positions share a board line segment.
    #[must_use]
    pub fn are_adjacent(&self, a: PositionId, b: PositionId) -> bool {
        self.neighbors(a).contains(&b)
    }

    // === Occupancy ===

    /// Color at a position. `None` if empty or unknown.
    #[must_use]
    pub fn occupant(&self, id: PositionId) -> Option<Color> {
        self.position(id).and_then(Position::occupant)
    }

    /// Check whether a known position is empty.
    #[must_use]
    pub fn is_empty(&self, id: PositionId) -> bool {
        self.position(id).is_some_and(Position::is_empty)
    }

    /// Positions holding a token of `color`, in index order.
    pub fn occupied_by(&self, color: Color) -> impl Iterator<Item = PositionId> + '_ {
        self.positions
            .iter()
            .filter(move |p| p.occupant == Some(color))
            .map(Position::id)
    }

    /// Empty positions, in index order.
    pub fn empty_positions(&self) -> impl Iterator<Item = PositionId> + '_ {
        self.positions
            .iter()
            .filter(|p| p.is_empty())
            .map(Position::id)
    }

    /// Number of tokens of `color` on the board.
    #[must_use]
    pub fn count(&self, color: Color) -> usize {
        self.occupied_by(color).count()
    }

    /// Occupancy by index.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Option<Color>> {
        self.positions.iter().map(Position::occupant).collect()
    }

    pub(crate) fn set_occupant(&mut self, id: PositionId, occupant: Option<Color>) {
        self.positions[id.index()].occupant = occupant;
    }

    // === Selection ===

    /// The selected position, if any.
    #[must_use]
    pub fn selected(&self) -> Option<PositionId> {
        self.selected
    }

    /// Select a position, dropping any previous selection.
    pub(crate) fn select(&mut self, id: PositionId) {
        self.clear_selection();
        self.positions[id.index()].selected = true;
        self.selected = Some(id);
    }

    /// Drop the selection.
    pub(crate) fn clear_selection(&mut self) {
        if let Some(previous) = self.selected.take() {
            self.positions[previous.index()].selected = false;
        }
    }
}
