use serde::{Deserialize, Serialize};

use super::cargo::Mineral;
use super::constants::TechField;
use super::hab::Hab;
use super::position::Vector2;
use super::race::Race;
use super::race_spec::RaceSpec;
use super::ship_design::ShipDesign;
use super::tech::TechLevel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleTarget {
    None,
    Any,
    Starbase,
    ArmedShips,
    BombersFreighters,
    UnarmedShips,
    FuelTransports,
    Freighters,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleTactic {
    Disengage,
    DisengageIfChallenged,
    MinimizeDamageToSelf,
    MaximizeNetDamage,
    MaximizeDamageRatio,
    MaximizeDamage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleAttackWho {
    Enemies,
    EnemiesAndNeutrals,
    Everyone,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattlePlan {
    pub name: String,
    pub primary_target: BattleTarget,
    pub secondary_target: BattleTarget,
    pub tactic: BattleTactic,
    pub attack_who: BattleAttackWho,
    pub dump_cargo: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransportAction {
    None,
    LoadAll,
    UnloadAll,
    LoadAmount,
    UnloadAmount,
    FillPercent,
    WaitForPercent,
    LoadDunnage,
    SetAmountTo,
    SetWaypointTo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportTask {
    pub action: TransportAction,
    pub amount: i32,
}

impl TransportTask {
    pub const NONE: TransportTask = TransportTask {
        action: TransportAction::None,
        amount: 0,
    };
}

/// Per-cargo tasks: ironium, boranium, germanium, colonists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransportPlan {
    pub name: String,
    pub tasks: [TransportTask; 4],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductionItemType {
    AutoMinTerraform,
    AutoMaxTerraform,
    AutoFactories,
    AutoMines,
    AutoDefenses,
    AutoMineralAlchemy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionPlanItem {
    pub item: ProductionItemType,
    pub quantity: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionPlan {
    pub name: String,
    pub items: Vec<ProductionPlanItem>,
    pub contributes_only_leftover_to_research: bool,
}

/// How a player picks the next field once the current one levels up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NextResearchField {
    SameField,
    #[default]
    LowestField,
}

/// What a player knows about a planet. `None` fields are unknown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetIntel {
    pub planet_id: usize,
    pub name: String,
    pub position: Vector2,
    pub report_year: Option<i32>,
    pub owner: Option<usize>,
    pub hab: Option<Hab>,
    pub mineral_concentration: Option<Mineral>,
    pub surface_minerals: Option<Mineral>,
    pub population: Option<i32>,
}

impl PlanetIntel {
    pub fn explored(&self) -> bool {
        self.report_year.is_some()
    }
}

/// The race configuration a player joins the game with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSetup {
    pub name: String,
    pub race: Race,
}

impl PlayerSetup {
    pub fn new(name: &str, race: Race) -> Self {
        PlayerSetup {
            name: name.to_string(),
            race,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub num: usize,
    pub name: String,
    pub race: Race,
    pub race_spec: RaceSpec,
    pub tech_levels: TechLevel,
    /// Research points spent toward the next level, per field.
    pub tech_levels_spent: TechLevel,
    pub researching: TechField,
    pub next_research_field: NextResearchField,
    pub homeworld: Option<usize>,
    pub extra_world: Option<usize>,
    pub designs: Vec<ShipDesign>,
    pub battle_plans: Vec<BattlePlan>,
    pub transport_plans: Vec<TransportPlan>,
    pub production_plans: Vec<ProductionPlan>,
    pub planet_intel: Vec<PlanetIntel>,
}

impl Player {
    pub fn new(num: usize, setup: PlayerSetup, race_spec: RaceSpec) -> Self {
        Player {
            num,
            name: setup.name,
            race: setup.race,
            race_spec,
            tech_levels: TechLevel::default(),
            tech_levels_spent: TechLevel::default(),
            researching: TechField::Energy,
            next_research_field: NextResearchField::default(),
            homeworld: None,
            extra_world: None,
            designs: Vec::new(),
            battle_plans: Vec::new(),
            transport_plans: Vec::new(),
            production_plans: Vec::new(),
            planet_intel: Vec::new(),
        }
    }

    pub fn design(&self, name: &str) -> Option<&ShipDesign> {
        self.designs.iter().find(|design| design.name == name)
    }

    pub fn design_by_num(&self, num: usize) -> Option<&ShipDesign> {
        self.designs.iter().find(|design| design.num == num)
    }
}
