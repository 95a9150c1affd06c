//! ATP energy balance of the cell being edited.
//!
//! Tracks how much ATP each organelle produces or consumes per second, plus
//! the two built-in consumers (base movement and osmoregulation). The editor's
//! segmented ATP bars are drawn from this breakdown.


use bevy::prelude::*;
use std::collections::BTreeMap;

use crate::config::BASE_MOVEMENT;

/// Per-item ATP production and consumption, in ATP per second.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct EnergyBalance {
    /// Production keyed by item name (organelle internal name).
    pub production: BTreeMap<String, f32>,
    /// Consumption keyed by item name (organelle or reserved identifier).
    pub consumption: BTreeMap<String, f32>,
    pub total_production: f32,
    pub total_consumption: f32,
    /// Consumption when the cell is not moving (excludes base movement).
    pub total_consumption_stationary: f32,
}

impl EnergyBalance {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add ATP production for `name`. Repeated calls accumulate.
    pub fn add_production(&mut self, name: impl Into<String>, amount: f32) {
        let name = name.into();
        if !is_valid_amount(&name, amount) {
            return;
        }
        *self.production.entry(name).or_insert(0.0) += amount;
        self.total_production += amount;
    }

    /// Add ATP consumption for `name`. Repeated calls accumulate.
    ///
    /// Consumption recorded under [`BASE_MOVEMENT`] is excluded from the
    /// stationary total.
    pub fn add_consumption(&mut self, name: impl Into<String>, amount: f32) {
        let name = name.into();
        if !is_valid_amount(&name, amount) {
            return;
        }
        let moving_only = name == BASE_MOVEMENT;
        *self.consumption.entry(name).or_insert(0.0) += amount;
        self.total_consumption += amount;
        if !moving_only {
            self.total_consumption_stationary += amount;
        }
    }

    /// ATP spent on moving the cell.
    pub fn add_movement_consumption(&mut self, amount: f32) {
        self.add_consumption(BASE_MOVEMENT, amount);
    }

    /// Net ATP per second while moving.
    pub fn final_balance(&self) -> f32 {
        self.total_production - self.total_consumption
    }

    /// Net ATP per second while standing still.
    pub fn final_balance_stationary(&self) -> f32 {
        self.total_production - self.total_consumption_stationary
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

fn is_valid_amount(name: &str, amount: f32) -> bool {
    if amount.is_finite() && amount >= 0.0 {
        return true;
    }
    warn!("Ignoring invalid ATP amount {} for '{}'", amount, name);
    false
}
