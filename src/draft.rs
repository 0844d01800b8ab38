//! Draft-phase pick heuristic.
//!
//! During the draft my hand holds the three cards on offer. Each is scored
//! by a flat formula over its stats, with a small penalty for cards whose
//! mana-curve slot is already full. The curve is explicit state owned by the
//! turn driver and is updated after every pick.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardNumber, CardType};
use crate::core::DRAFT_CHOICES;

/// Number of mana-curve slots. Slot `i` holds cost `i + 1`; the first slot
/// also takes cost 0 and the last takes cost 7 and above.
pub const CURVE_SLOTS: usize = 7;

/// Card number of "Decimate", which the formula badly overrates.
pub const DECIMATE: CardNumber = CardNumber(151);

/// Remaining wanted picks per cost bracket.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManaCurve {
    slots: [i32; CURVE_SLOTS],
}

impl Default for ManaCurve {
    fn default() -> Self {
        Self::new([2, 8, 7, 5, 4, 2, 2])
    }
}

impl ManaCurve {
    /// Create a curve with the given targets.
    #[must_use]
    pub const fn new(slots: [i32; CURVE_SLOTS]) -> Self {
        Self { slots }
    }

    /// Slot index for a mana cost.
    #[must_use]
    pub fn slot(cost: i32) -> usize {
        (cost - 1).clamp(0, CURVE_SLOTS as i32 - 1) as usize
    }

    /// Remaining wanted picks per slot.
    #[must_use]
    pub fn slots(&self) -> &[i32; CURVE_SLOTS] {
        &self.slots
    }

    /// Check if no more cards of this cost are wanted.
    #[must_use]
    pub fn is_filled(&self, cost: i32) -> bool {
        self.slots[Self::slot(cost)] <= 0
    }

    /// Record a pick of this cost.
    pub fn take(&mut self, cost: i32) {
        self.slots[Self::slot(cost)] -= 1;
    }
}

/// Score a draft candidate. Higher is better.
#[must_use]
pub fn draft_value(card: &Card, curve: &ManaCurve) -> f64 {
    let mut value = f64::from(card.attack.abs() + card.defense.abs());
    value += f64::from(card.card_draw);
    value += card.abilities.len() as f64;
    value += f64::from(card.my_health_change) / 3.0;
    value -= f64::from(card.enemy_health_change) / 3.0;
    value -= f64::from(card.cost * 2);

    if card.cost == 0 || card.attack == 0 {
        value -= 2.0;
    }
    if matches!(card.card_type, CardType::RedItem | CardType::BlueItem) {
        value -= 1.0;
    }
    if card.card_number == DECIMATE {
        value -= 94.0;
    }
    if curve.is_filled(card.cost) {
        value -= 1.0;
    }
    value
}

/// Pick among the first three candidates and record the pick in `curve`.
///
/// Ties go to the later card. Returns 0 without touching the curve when
/// nothing is offered.
pub fn pick_card(candidates: &[Card], curve: &mut ManaCurve) -> usize {
    let offered = &candidates[..candidates.len().min(DRAFT_CHOICES)];

    let mut best_index = 0;
    let mut best_value = f64::NEG_INFINITY;
    for (i, card) in offered.iter().enumerate() {
        let value = draft_value(card, curve);
        if value >= best_value {
            best_value = value;
            best_index = i;
        }
    }

    if let Some(card) = offered.get(best_index) {
        curve.take(card.cost);
    }
    best_index
}
