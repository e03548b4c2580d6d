use core::fmt::{self, Display};
use rand::Rng;
use serde_derive::Serialize;

use crate::random;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Quality {
    Normal,
    Premium,
    Legendary,
}

impl Quality {
    pub const ALL: [Quality; 3] = [Quality::Normal, Quality::Premium, Quality::Legendary];

    pub fn label(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Premium => "premium",
            Self::Legendary => "legendary",
        }
    }

    pub fn unit_cost(self) -> u32 {
        match self {
            Self::Normal => 1,
            Self::Premium => 3,
            Self::Legendary => 5,
        }
    }
}

impl Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum IngredientKind {
    Herb,
    Mushroom,
    Root,
}

impl IngredientKind {
    pub const ALL: [IngredientKind; 3] = [
        IngredientKind::Herb,
        IngredientKind::Mushroom,
        IngredientKind::Root,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Herb => "herb",
            Self::Mushroom => "mushroom",
            Self::Root => "root",
        }
    }
}

impl Display for IngredientKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A concrete batch of one ingredient. Immutable once created; equality is
/// structural so inventory removal matches the exact batch shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Ingredient {
    pub kind: IngredientKind,
    pub quantity: u32,
    pub quality: Quality,
}

impl Ingredient {
    pub fn cost(&self) -> u32 {
        self.quantity * self.quality.unit_cost()
    }
}

impl Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.quantity, self.quality, self.kind)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum PotionKind {
    Healing,
    Invisibility,
    Strength,
}

impl PotionKind {
    pub const ALL: [PotionKind; 3] = [
        PotionKind::Healing,
        PotionKind::Invisibility,
        PotionKind::Strength,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Healing => "healing-potion",
            Self::Invisibility => "invisibility-potion",
            Self::Strength => "strength-potion",
        }
    }

    pub fn recipe(self) -> &'static [Ingredient] {
        match self {
            Self::Healing => &[
                Ingredient {
                    kind: IngredientKind::Herb,
                    quantity: 3,
                    quality: Quality::Normal,
                },
                Ingredient {
                    kind: IngredientKind::Mushroom,
                    quantity: 2,
                    quality: Quality::Normal,
                },
                Ingredient {
                    kind: IngredientKind::Root,
                    quantity: 1,
                    quality: Quality::Normal,
                },
            ],
            Self::Invisibility => &[
                Ingredient {
                    kind: IngredientKind::Herb,
                    quantity: 2,
                    quality: Quality::Premium,
                },
                Ingredient {
                    kind: IngredientKind::Mushroom,
                    quantity: 1,
                    quality: Quality::Normal,
                },
                Ingredient {
                    kind: IngredientKind::Root,
                    quantity: 1,
                    quality: Quality::Normal,
                },
            ],
            Self::Strength => &[
                Ingredient {
                    kind: IngredientKind::Herb,
                    quantity: 2,
                    quality: Quality::Legendary,
                },
                Ingredient {
                    kind: IngredientKind::Mushroom,
                    quantity: 3,
                    quality: Quality::Premium,
                },
                Ingredient {
                    kind: IngredientKind::Root,
                    quantity: 2,
                    quality: Quality::Premium,
                },
            ],
        }
    }

    // (mean, lag) of the extra-power draw
    pub fn power_curve(self) -> (f64, u64) {
        match self {
            Self::Healing => (3.0, 1),
            Self::Invisibility => (2.0, 1),
            Self::Strength => (4.0, 2),
        }
    }

    pub fn brew(self, rng: &mut impl Rng) -> (Potion, Vec<Ingredient>) {
        let (mean, lag) = self.power_curve();
        let potion = Potion {
            kind: self,
            extra_power: random::poisson(rng, mean, lag),
        };
        (potion, self.recipe().to_vec())
    }
}

impl Display for PotionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct Potion {
    pub kind: PotionKind,
    pub extra_power: u64,
}

impl Potion {
    pub fn power(&self) -> u64 {
        match self.kind {
            PotionKind::Strength => self.extra_power + 10,
            PotionKind::Healing | PotionKind::Invisibility => self.extra_power,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn cost_is_quantity_times_unit_cost() {
        let one = Ingredient {
            kind: IngredientKind::Herb,
            quantity: 1,
            quality: Quality::Premium,
        };
        let two = Ingredient { quantity: 2, ..one };
        assert_eq!(one.cost(), 3);
        assert_eq!(two.cost(), 2 * one.cost());
        assert_eq!(two.cost(), 6);
        assert_eq!(
            Ingredient {
                kind: IngredientKind::Root,
                quantity: 4,
                quality: Quality::Legendary,
            }
            .cost(),
            20
        );
    }

    #[test]
    fn every_kind_has_a_recipe() {
        for kind in PotionKind::ALL {
            assert!(!kind.recipe().is_empty(), "{kind} has an empty recipe");
        }
    }

    #[test]
    fn strength_potions_report_a_flat_bonus() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let (potion, _) = PotionKind::Strength.brew(&mut rng);
            assert_eq!(potion.power(), potion.extra_power + 10);
            // the draw is lag-shifted, so the bonus floor is lag + 10
            assert!(potion.power() >= 12);
        }
        let (healing, _) = PotionKind::Healing.brew(&mut rng);
        assert_eq!(healing.power(), healing.extra_power);
    }

    #[test]
    fn brewing_returns_the_recipe_instances() {
        let mut rng = StdRng::seed_from_u64(7);
        let (_, ingredients) = PotionKind::Invisibility.brew(&mut rng);
        assert_eq!(ingredients, PotionKind::Invisibility.recipe().to_vec());
    }
}
