//! Charge sandbox session state.
//!
//! All pointer handling for the charge canvas goes through [`SandboxState`]:
//! the component owns one instance and feeds it press/move/release events, and
//! the renderer only reads from it. Charges have no identity beyond their
//! position in the list.

pub use crate::physics::PointCharge;
use crate::physics::{sample_field, FieldArrow, FieldGrid};

/// Pointer must be strictly closer than this to grab a placed charge.
pub const CHARGE_GRAB_RADIUS: f64 = 20.0;
/// Height of the tray strip along the bottom of the canvas
pub const TRAY_HEIGHT: f64 = 80.0;
pub const ICON_SIZE: f64 = 40.0;
/// Distance between field arrow samples
pub const FIELD_SPACING: f64 = 25.0;

pub const DEFAULT_CANVAS_WIDTH: f64 = 800.0;
pub const DEFAULT_CANVAS_HEIGHT: f64 = 560.0;

/// Axis-aligned rectangle in canvas units. Edges are inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    pub fn contains(&self, px: f64, py: f64) -> bool {
        px >= self.x && px <= self.x + self.w && py >= self.y && py <= self.y + self.h
    }

    pub fn center(&self) -> (f64, f64) {
        (self.x + self.w / 2.0, self.y + self.h / 2.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    Positive,
    Negative,
}

impl Polarity {
    /// Signed charge for a tray magnitude. The sign always follows the icon,
    /// whatever sign was typed into the magnitude field.
    pub fn apply(&self, magnitude: f64) -> f64 {
        match self {
            Polarity::Positive => magnitude.abs(),
            Polarity::Negative => -magnitude.abs(),
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Polarity::Positive => "+",
            Polarity::Negative => "\u{2212}",
        }
    }
}

/// Tray strip plus the two spawn icons inside it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrayLayout {
    pub tray: Rect,
    pub positive_icon: Rect,
    pub negative_icon: Rect,
}

impl TrayLayout {
    pub fn for_canvas(width: f64, height: f64) -> Self {
        let top = height - TRAY_HEIGHT;
        let icon_y = top + (TRAY_HEIGHT - ICON_SIZE) / 2.0;
        Self {
            tray: Rect::new(0.0, top, width, TRAY_HEIGHT),
            positive_icon: Rect::new(20.0, icon_y, ICON_SIZE, ICON_SIZE),
            negative_icon: Rect::new(200.0, icon_y, ICON_SIZE, ICON_SIZE),
        }
    }

    pub fn icon_at(&self, x: f64, y: f64) -> Option<Polarity> {
        if self.positive_icon.contains(x, y) {
            Some(Polarity::Positive)
        } else if self.negative_icon.contains(x, y) {
            Some(Polarity::Negative)
        } else {
            None
        }
    }
}

/// Magnitudes (nC) currently typed next to the tray icons
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrayMagnitudes {
    pub positive: f64,
    pub negative: f64,
}

impl Default for TrayMagnitudes {
    fn default() -> Self {
        Self { positive: 1.0, negative: 1.0 }
    }
}

impl TrayMagnitudes {
    pub fn for_polarity(&self, polarity: Polarity) -> f64 {
        match polarity {
            Polarity::Positive => self.positive,
            Polarity::Negative => self.negative,
        }
    }
}

/// Parse a magnitude field. Anything unparsable becomes NaN and flows on into
/// the field math unchanged.
pub fn parse_magnitude(input: &str) -> f64 {
    input.trim().parse::<f64>().unwrap_or(f64::NAN)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Drag {
    Idle,
    /// Dragging the placed charge at this index
    Existing(usize),
    /// Dragging a charge pulled out of the tray, not yet in the list
    Pending(PointCharge),
}

/// What a pointer release did to the charge list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    Placed,
    Moved,
    Removed,
    Cancelled,
    Nothing,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SandboxState {
    charges: Vec<PointCharge>,
    field_overlay: bool,
    drag: Drag,
    layout: TrayLayout,
    width: f64,
    height: f64,
}

impl Default for SandboxState {
    fn default() -> Self {
        Self::new(DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT)
    }
}

impl SandboxState {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            charges: Vec::new(),
            field_overlay: false,
            drag: Drag::Idle,
            layout: TrayLayout::for_canvas(width, height),
            width,
            height,
        }
    }

    pub fn charges(&self) -> &[PointCharge] {
        &self.charges
    }

    pub fn field_overlay(&self) -> bool {
        self.field_overlay
    }

    pub fn set_field_overlay(&mut self, enabled: bool) {
        self.field_overlay = enabled;
    }

    pub fn drag(&self) -> Drag {
        self.drag
    }

    pub fn layout(&self) -> &TrayLayout {
        &self.layout
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn is_dragging(&self) -> bool {
        !matches!(self.drag, Drag::Idle)
    }

    /// The tray charge following the pointer, if any
    pub fn pending_charge(&self) -> Option<&PointCharge> {
        match &self.drag {
            Drag::Pending(c) => Some(c),
            _ => None,
        }
    }

    pub fn toggle_field_overlay(&mut self) {
        self.field_overlay = !self.field_overlay;
    }

    pub fn add_charge(&mut self, charge: PointCharge) {
        self.charges.push(charge);
    }

    pub fn remove_charge_at(&mut self, index: usize) -> Option<PointCharge> {
        (index < self.charges.len()).then(|| self.charges.remove(index))
    }

    pub fn move_charge_at(&mut self, index: usize, x: f64, y: f64) -> bool {
        match self.charges.get_mut(index) {
            Some(c) => {
                c.x = x;
                c.y = y;
                true
            }
            None => false,
        }
    }

    /// Remove every charge and abandon any drag in progress.
    pub fn reset(&mut self) {
        self.charges.clear();
        self.drag = Drag::Idle;
    }

    /// Index of the first charge within grab range of the pointer.
    pub fn charge_at(&self, x: f64, y: f64) -> Option<usize> {
        self.charges
            .iter()
            .position(|c| c.distance_to(x, y) < CHARGE_GRAB_RADIUS)
    }

    /// Start a drag on pointer press. Tray icons win over placed charges.
    ///
    /// Returns `false` when nothing was hit or a drag is already active.
    pub fn begin_drag(&mut self, x: f64, y: f64, magnitudes: &TrayMagnitudes) -> bool {
        if self.is_dragging() {
            return false;
        }
        if let Some(polarity) = self.layout.icon_at(x, y) {
            let q = polarity.apply(magnitudes.for_polarity(polarity));
            self.drag = Drag::Pending(PointCharge::new(x, y, q));
            return true;
        }
        match self.charge_at(x, y) {
            Some(index) => {
                self.drag = Drag::Existing(index);
                true
            }
            None => false,
        }
    }

    /// Follow the pointer. Positions are not clamped to the canvas.
    pub fn update_drag(&mut self, x: f64, y: f64) {
        match self.drag {
            Drag::Idle => {}
            Drag::Existing(index) => {
                self.move_charge_at(index, x, y);
            }
            Drag::Pending(ref mut c) => {
                c.x = x;
                c.y = y;
            }
        }
    }

    /// Finish the drag at the release position.
    ///
    /// Dropping into the tray deletes a placed charge or cancels a pending one;
    /// a pending charge dropped anywhere else joins the list.
    pub fn end_drag(&mut self, x: f64, y: f64) -> DropOutcome {
        self.update_drag(x, y);
        let in_tray = self.layout.tray.contains(x, y);
        match std::mem::replace(&mut self.drag, Drag::Idle) {
            Drag::Idle => DropOutcome::Nothing,
            Drag::Existing(index) => {
                if in_tray {
                    match self.remove_charge_at(index) {
                        Some(_) => DropOutcome::Removed,
                        None => DropOutcome::Nothing,
                    }
                } else {
                    DropOutcome::Moved
                }
            }
            Drag::Pending(charge) => {
                if in_tray {
                    DropOutcome::Cancelled
                } else {
                    self.charges.push(charge);
                    DropOutcome::Placed
                }
            }
        }
    }

    /// Abandon the drag without a release, e.g. when the browser cancels the
    /// pointer. A pending charge is dropped; a placed charge stays where it
    /// was last moved to.
    pub fn cancel_drag(&mut self) -> DropOutcome {
        match std::mem::replace(&mut self.drag, Drag::Idle) {
            Drag::Idle => DropOutcome::Nothing,
            Drag::Existing(_) => DropOutcome::Moved,
            Drag::Pending(_) => DropOutcome::Cancelled,
        }
    }

    pub fn field_grid(&self) -> FieldGrid {
        FieldGrid::new(self.width, self.height, FIELD_SPACING, TRAY_HEIGHT)
    }

    /// Arrows for the overlay, recomputed from scratch on every call.
    /// Empty while the overlay is off.
    pub fn field_arrows(&self) -> Vec<FieldArrow> {
        if !self.field_overlay {
            return Vec::new();
        }
        sample_field(&self.field_grid(), &self.charges)
    }
}
