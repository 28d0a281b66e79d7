/// All game entity types — plain data plus the geometric helpers they need.
/// Game rules live in `compute`.

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Axis-aligned rectangle in screen pixels. The size is fixed at
/// construction; only the position moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn set_x(&mut self, x: i32) {
        self.x = x;
    }

    pub fn shift_x(&mut self, dx: i32) {
        self.x = self.x.saturating_add(dx);
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn set_y(&mut self, y: i32) {
        self.y = y;
    }

    pub fn shift_y(&mut self, dy: i32) {
        self.y = self.y.saturating_add(dy);
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// True when the interiors overlap. Shared edges and empty rectangles
    /// never collide.
    pub fn collides(&self, other: &Rect) -> bool {
        if self.width <= 0 || self.height <= 0 || other.width <= 0 || other.height <= 0 {
            return false;
        }
        // i64 keeps far off-screen positions from overflowing
        let (ax, ay, bx, by) = (
            self.x as i64,
            self.y as i64,
            other.x as i64,
            other.y as i64,
        );
        ax < bx + other.width as i64
            && bx < ax + self.width as i64
            && ay < by + other.height as i64
            && by < ay + self.height as i64
    }
}

// ── Sprites ───────────────────────────────────────────────────────────────────

/// Which loaded image a character is drawn with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpriteKind {
    Player,
    Clam,
}

/// A rectangle that is drawn with a sprite and can be hidden.
#[derive(Clone, Debug, PartialEq)]
pub struct Character {
    pub rect: Rect,
    pub sprite: SpriteKind,
    pub visible: bool,
}

// ── Clam field ────────────────────────────────────────────────────────────────

/// A fixed batch of clams. Membership in the active set is a bitmask over
/// the rectangle array: bit `i` set means clam `i` is still uncollected.
#[derive(Clone, Debug, PartialEq)]
pub struct ClamField {
    rects: Vec<Rect>,
    alive: u64,
}

impl ClamField {
    /// Every clam starts alive.
    ///
    /// The mask holds at most [`MAX_CLAMS`](crate::config::MAX_CLAMS) clams.
    /// `GameConfig::validate` rejects larger counts, and `session::play`
    /// refuses an invalid config, so a longer list only reaches here from a
    /// caller that skipped validation; the extras are dropped with a warning.
    pub fn new(mut rects: Vec<Rect>) -> Self {
        if rects.len() > crate::config::MAX_CLAMS {
            log::warn!(
                "{} clams requested, keeping the first {}",
                rects.len(),
                crate::config::MAX_CLAMS
            );
            rects.truncate(crate::config::MAX_CLAMS);
        }
        let alive = match rects.len() {
            64 => u64::MAX,
            n => (1u64 << n) - 1,
        };
        Self { rects, alive }
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// Clams not yet collected.
    pub fn remaining(&self) -> usize {
        self.alive.count_ones() as usize
    }

    pub fn rect(&self, index: usize) -> Option<&Rect> {
        self.rects.get(index)
    }

    pub fn is_alive(&self, index: usize) -> bool {
        index < self.rects.len() && self.alive & (1u64 << index) != 0
    }

    /// Removes clam `index` from the active set. Returns whether it was
    /// still alive, so a clam can only ever be collected once.
    pub fn collect(&mut self, index: usize) -> bool {
        if !self.is_alive(index) {
            return false;
        }
        self.alive &= !(1u64 << index);
        true
    }

    /// Every clam with its alive flag, in spawn order.
    pub fn iter(&self) -> impl Iterator<Item = (&Rect, bool)> + '_ {
        self.rects
            .iter()
            .enumerate()
            .map(move |(i, r)| (r, self.alive & (1u64 << i) != 0))
    }
}

// ── Tagged entity view ────────────────────────────────────────────────────────

/// A borrowed view of one thing on screen. The display layer draws these
/// and never looks at `GameState` fields directly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Entity<'a> {
    Player(&'a Character),
    Clam { rect: &'a Rect, visible: bool },
    Wave(&'a Rect),
}

impl<'a> Entity<'a> {
    /// The sprite this entity is drawn with; the wave is a flat fill.
    pub fn sprite(&self) -> Option<SpriteKind> {
        match self {
            Entity::Player(c) => Some(c.sprite),
            Entity::Clam { .. } => Some(SpriteKind::Clam),
            Entity::Wave(_) => None,
        }
    }

    pub fn rect(&self) -> &'a Rect {
        match *self {
            Entity::Player(c) => &c.rect,
            Entity::Clam { rect, .. } => rect,
            Entity::Wave(r) => r,
        }
    }

    /// Hidden entities render as nothing.
    pub fn is_visible(&self) -> bool {
        match self {
            Entity::Player(c) => c.visible,
            Entity::Clam { visible, .. } => *visible,
            Entity::Wave(_) => true,
        }
    }
}

// ── Movement ──────────────────────────────────────────────────────────────────

/// Screen-space direction; y grows downward.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

// ── Game status ───────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndReason {
    /// The session clock reached `max_time`.
    TimeUp,
    /// The player asked to leave.
    Quit,
    /// The player touched the wave.
    Swept,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    GameOver(EndReason),
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire game state. Cloneable so pure update functions can return a
/// new copy without mutating the original.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub player: Character,
    pub clams: ClamField,
    pub wave: Rect,
    pub score: u32,
    /// Completed loop iterations; simulation time is `frame / fps`.
    pub frame: u64,
    pub status: GameStatus,
}

impl GameState {
    /// Elapsed simulation seconds.
    pub fn elapsed(&self, fps: u32) -> f64 {
        self.frame as f64 / fps as f64
    }

    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }

    /// Everything on screen in draw order: player, clams, wave.
    pub fn entities(&self) -> impl Iterator<Item = Entity<'_>> + '_ {
        std::iter::once(Entity::Player(&self.player))
            .chain(
                self.clams
                    .iter()
                    .map(|(rect, visible)| Entity::Clam { rect, visible }),
            )
            .chain(std::iter::once(Entity::Wave(&self.wave)))
    }
}
