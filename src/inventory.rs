use crate::{
    data::{Ingredient, IngredientKind, Quality},
    random,
};
use rand::Rng;
use std::collections::HashMap;

/// Ingredient stock keyed by display name, each entry an ordered list of the
/// concrete batches held.
#[derive(Debug, Default)]
pub struct Inventory {
    stock: HashMap<&'static str, Vec<Ingredient>>,
}

impl Inventory {
    pub fn new() -> Inventory {
        Inventory::default()
    }

    pub fn add(&mut self, ingredient: Ingredient) {
        self.stock
            .entry(ingredient.kind.label())
            .or_default()
            .push(ingredient);
    }

    /// Removes the first structurally equal batch. An absent batch is a
    /// no-op; the return value says whether anything came out.
    pub fn remove(&mut self, ingredient: &Ingredient) -> bool {
        let Some(instances) = self.stock.get_mut(ingredient.kind.label()) else {
            return false;
        };
        let Some(position) = instances.iter().position(|i| i == ingredient) else {
            return false;
        };
        instances.remove(position);
        true
    }

    pub fn stock_of(&self, name: &str) -> &[Ingredient] {
        self.stock.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn count(&self, name: &str) -> usize {
        self.stock_of(name).len()
    }

    pub fn total(&self) -> usize {
        self.stock.values().map(Vec::len).sum()
    }

    pub fn generate(&mut self, rng: &mut impl Rng) -> Ingredient {
        let ingredient = Ingredient {
            kind: *random::choose(rng, &IngredientKind::ALL),
            quantity: random::uniform_int(rng, 1, 5),
            quality: *random::choose(rng, &Quality::ALL),
        };
        self.add(ingredient);
        ingredient
    }

    pub fn report(&self) -> Vec<(&'static str, usize)> {
        let mut report: Vec<_> = self
            .stock
            .iter()
            .map(|(&name, instances)| (name, instances.len()))
            .collect();
        report.sort_unstable();
        report
    }
}
