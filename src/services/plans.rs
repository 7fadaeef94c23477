use crate::models::player::{
    BattleAttackWho, BattlePlan, BattleTactic, BattleTarget, ProductionItemType, ProductionPlan,
    ProductionPlanItem, TransportAction, TransportPlan, TransportTask,
};

pub const DEFAULT_PLAN_NAME: &str = "Default";

fn battle_plan(
    name: &str,
    primary_target: BattleTarget,
    secondary_target: BattleTarget,
    tactic: BattleTactic,
    attack_who: BattleAttackWho,
) -> BattlePlan {
    BattlePlan {
        name: name.to_string(),
        primary_target,
        secondary_target,
        tactic,
        attack_who,
        dump_cargo: false,
    }
}

/// Battle plans every player starts with. The first one is the default.
pub fn default_battle_plans() -> Vec<BattlePlan> {
    use BattleAttackWho::*;
    use BattleTactic::*;
    use BattleTarget::*;

    vec![
        battle_plan(DEFAULT_PLAN_NAME, ArmedShips, Any, MaximizeDamageRatio, Enemies),
        battle_plan("Kill Starbase", Starbase, ArmedShips, MaximizeDamageRatio, Enemies),
        battle_plan("No Battle", None, None, Disengage, Enemies),
        battle_plan(
            "Kill Enemy Freighters",
            BombersFreighters,
            Any,
            DisengageIfChallenged,
            Enemies,
        ),
        battle_plan("Max Defense", ArmedShips, Any, MinimizeDamageToSelf, EnemiesAndNeutrals),
    ]
}

pub fn default_transport_plans() -> Vec<TransportPlan> {
    let load = TransportTask {
        action: TransportAction::LoadAll,
        amount: 0,
    };
    let unload = TransportTask {
        action: TransportAction::UnloadAll,
        amount: 0,
    };

    vec![
        TransportPlan {
            name: "Quick Load".to_string(),
            tasks: [load, load, load, TransportTask::NONE],
        },
        TransportPlan {
            name: "Quick Drop".to_string(),
            tasks: [unload, unload, unload, unload],
        },
    ]
}

pub fn default_production_plans() -> Vec<ProductionPlan> {
    vec![ProductionPlan {
        name: DEFAULT_PLAN_NAME.to_string(),
        items: vec![
            ProductionPlanItem {
                item: ProductionItemType::AutoFactories,
                quantity: 10,
            },
            ProductionPlanItem {
                item: ProductionItemType::AutoMines,
                quantity: 10,
            },
        ],
        contributes_only_leftover_to_research: false,
    }]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_plans_come_first() {
        assert_eq!(default_battle_plans()[0].name, DEFAULT_PLAN_NAME);
        assert_eq!(default_production_plans()[0].name, DEFAULT_PLAN_NAME);
        assert_eq!(default_transport_plans().len(), 2);
    }
}
