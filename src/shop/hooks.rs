//! The shop collaborator.
//!
//! Shop-phase abilities reach outside the team: they add gold, buff the units
//! on offer, stock extra food, and so on. The shop itself (rolling, freezing,
//! pricing) lives behind `ShopHooks`; the engine only calls these methods.
//!
//! `ShopLedger` is a plain in-memory implementation that records what was
//! asked of it. It is enough for simulations that don't model a real shop and
//! for tests.

use serde::{Deserialize, Serialize};

use crate::units::Unit;

use super::Food;

/// What abilities may ask of the shop.
pub trait ShopHooks {
    /// Offer a linked unit from the next tier (after a level-up).
    fn create_linked_offer(&mut self);

    /// Add (or with a negative amount, remove) gold.
    fn add_gold(&mut self, amount: i32);

    /// Units currently on offer.
    fn shop_units_mut(&mut self) -> &mut [Unit];

    /// Add a food to the shop.
    fn stock_food(&mut self, food: Food);

    /// Replace every food on offer.
    fn replace_food(&mut self, foods: &[Food]);

    /// Lower food prices.
    fn discount_food(&mut self, amount: i32);

    /// Stats every unit offered from now on gets.
    fn add_future_stats(&mut self, attack: i32, health: i32);
}

/// In-memory `ShopHooks`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopLedger {
    /// Current gold.
    pub gold: i32,
    /// Units on offer.
    pub offers: Vec<Unit>,
    /// Foods on offer.
    pub foods: Vec<Food>,
    /// Accumulated food discount.
    pub food_discount: i32,
    /// Linked offers requested.
    pub linked_offers: u32,
    /// Attack added to future offers.
    pub future_attack: i32,
    /// Health added to future offers.
    pub future_health: i32,
}

impl ShopLedger {
    /// Create a ledger with some gold.
    #[must_use]
    pub fn new(gold: i32) -> Self {
        Self {
            gold,
            ..Self::default()
        }
    }

    /// Set the units on offer (builder pattern).
    #[must_use]
    pub fn with_offers(mut self, offers: Vec<Unit>) -> Self {
        self.offers = offers;
        self
    }
}

impl ShopHooks for ShopLedger {
    fn create_linked_offer(&mut self) {
        self.linked_offers += 1;
    }

    fn add_gold(&mut self, amount: i32) {
        self.gold += amount;
    }

    fn shop_units_mut(&mut self) -> &mut [Unit] {
        &mut self.offers
    }

    fn stock_food(&mut self, food: Food) {
        self.foods.push(food);
    }

    fn replace_food(&mut self, foods: &[Food]) {
        self.foods = foods.to_vec();
    }

    fn discount_food(&mut self, amount: i32) {
        self.food_discount += amount;
    }

    fn add_future_stats(&mut self, attack: i32, health: i32) {
        self.future_attack += attack;
        self.future_health += health;
    }
}
