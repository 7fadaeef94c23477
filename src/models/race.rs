use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::constants::{HabType, Lrt, Prt, ResearchCost, TechField, IMMUNE_HAB_CENTER, NUM_TECH_FIELDS};
use super::hab::Hab;

/// A player-designed race: environment tolerance, economy settings and traits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Race {
    pub name: String,
    pub plural_name: String,
    pub prt: Prt,
    pub lrts: BTreeSet<Lrt>,
    pub hab_low: Hab,
    pub hab_high: Hab,
    pub immune_grav: bool,
    pub immune_temp: bool,
    pub immune_rad: bool,
    /// Maximum yearly growth rate in percent.
    pub growth_rate: i32,
    /// Colonists needed to generate one resource.
    pub pop_efficiency: i32,
    pub factory_output: i32,
    pub factory_cost: i32,
    /// Factories operated per 10,000 colonists.
    pub num_factories: i32,
    pub factories_cost_less: bool,
    pub mine_output: i32,
    pub mine_cost: i32,
    /// Mines operated per 10,000 colonists.
    pub num_mines: i32,
    /// Indexed by `TechField`.
    pub research_cost: [ResearchCost; NUM_TECH_FIELDS],
    pub techs_start_high: bool,
}

impl Default for Race {
    /// The stock humanoid race: Jack of all Trades, no LRTs, centered tolerance.
    fn default() -> Self {
        Race {
            name: "Humanoid".to_string(),
            plural_name: "Humanoids".to_string(),
            prt: Prt::JoaT,
            lrts: BTreeSet::new(),
            hab_low: Hab::new(15, 15, 15),
            hab_high: Hab::new(85, 85, 85),
            immune_grav: false,
            immune_temp: false,
            immune_rad: false,
            growth_rate: 15,
            pop_efficiency: 1000,
            factory_output: 10,
            factory_cost: 10,
            num_factories: 10,
            factories_cost_less: false,
            mine_output: 10,
            mine_cost: 5,
            num_mines: 10,
            research_cost: [ResearchCost::Standard; NUM_TECH_FIELDS],
            techs_start_high: false,
        }
    }
}

impl Race {
    pub fn with_traits(prt: Prt, lrts: &[Lrt]) -> Self {
        Race {
            prt,
            lrts: lrts.iter().copied().collect(),
            ..Race::default()
        }
    }

    pub fn has_lrt(&self, lrt: Lrt) -> bool {
        self.lrts.contains(&lrt)
    }

    pub fn is_immune(&self, hab_type: HabType) -> bool {
        match hab_type {
            HabType::Gravity => self.immune_grav,
            HabType::Temperature => self.immune_temp,
            HabType::Radiation => self.immune_rad,
        }
    }

    /// Midpoint of the tolerance range on each axis. Immune axes sit at 50.
    pub fn hab_center(&self) -> Hab {
        let mut center = Hab::default();
        for hab_type in HabType::ALL {
            let value = if self.is_immune(hab_type) {
                IMMUNE_HAB_CENTER
            } else {
                (self.hab_low.get(hab_type) + self.hab_high.get(hab_type)) / 2
            };
            center.set(hab_type, value);
        }
        center
    }

    /// Half the tolerance range on each axis.
    pub fn hab_width(&self) -> Hab {
        let mut width = Hab::default();
        for hab_type in HabType::ALL {
            width.set(
                hab_type,
                (self.hab_high.get(hab_type) - self.hab_low.get(hab_type)) / 2,
            );
        }
        width
    }

    pub fn research_cost_for(&self, field: TechField) -> ResearchCost {
        self.research_cost[field as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_race_is_centered_joat() {
        let race = Race::default();
        assert_eq!(race.prt, Prt::JoaT);
        assert!(race.lrts.is_empty());
        assert_eq!(race.hab_center(), Hab::new(50, 50, 50));
        assert_eq!(race.hab_width(), Hab::new(35, 35, 35));
    }

    #[test]
    fn immune_axis_centers_at_fifty() {
        let race = Race {
            hab_low: Hab::new(0, 60, 10),
            hab_high: Hab::new(20, 100, 30),
            immune_grav: true,
            ..Race::default()
        };
        assert_eq!(race.hab_center(), Hab::new(50, 80, 20));
    }

    #[test]
    fn with_traits_deduplicates_lrts() {
        let race = Race::with_traits(Prt::IT, &[Lrt::IFE, Lrt::IFE, Lrt::NAS]);
        assert_eq!(race.lrts.len(), 2);
        assert!(race.has_lrt(Lrt::NAS));
        assert!(!race.has_lrt(Lrt::LSP));
    }
}
