//! End-to-end negotiations between hand-built agents.

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;

use negotiation_agency::orchestrator::{ArgumentModel, EventBus, NegotiationEvent};
use negotiation_agency::{
    ArgumentAgent, ArgumentMode, CoupleValue, CriterionName, Item, Message, Negotiator,
    NegotiationError, Performative, Preferences, Value,
};

fn x() -> Item {
    Item::new("X", "The item under negotiation")
}

fn y() -> Item {
    Item::new("Y", "Something the responder likes better")
}

fn catalogue() -> Vec<Item> {
    vec![x(), y()]
}

/// Proposer rating X as `{cost: Good, noise: VeryGood}`.
fn proposer(mode: ArgumentMode) -> ArgumentAgent {
    let prefs = Preferences::new(vec![CriterionName::ProductionCost, CriterionName::Noise])
        .with_rating(&x(), CriterionName::ProductionCost, Value::Good)
        .with_rating(&x(), CriterionName::Noise, Value::VeryGood)
        .with_rating(&y(), CriterionName::ProductionCost, Value::Bad)
        .with_rating(&y(), CriterionName::Noise, Value::Bad);
    ArgumentAgent::new("agent_a", mode, Arc::new(prefs), catalogue())
}

/// Agent rating X on cost only; Y is its favourite.
fn cost_only(name: &str, mode: ArgumentMode, cost: Value) -> ArgumentAgent {
    let prefs = Preferences::new(vec![CriterionName::ProductionCost])
        .with_rating(&x(), CriterionName::ProductionCost, cost)
        .with_rating(&y(), CriterionName::ProductionCost, Value::VeryGood);
    ArgumentAgent::new(name, mode, Arc::new(prefs), catalogue())
}

fn responder(mode: ArgumentMode, cost: Value) -> ArgumentAgent {
    cost_only("agent_b", mode, cost)
}

fn model(a: ArgumentAgent, b: ArgumentAgent) -> ArgumentModel {
    let agents: Vec<Box<dyn Negotiator>> = vec![Box::new(a), Box::new(b)];
    ArgumentModel::with_agents(agents, catalogue(), StdRng::seed_from_u64(1))
        .with_event_bus(Arc::new(EventBus::new()))
}

fn trace(model: &ArgumentModel) -> Vec<(String, Performative, Option<CoupleValue>)> {
    model
        .transcript()
        .iter()
        .map(|m| (m.sender.clone(), m.performative, m.premise().ok().flatten()))
        .collect()
}

fn cv(criterion: CriterionName, value: Value) -> Option<CoupleValue> {
    Some(CoupleValue::new(criterion, value))
}

#[test]
fn test_classic_exchange_ends_committed() {
    let mut model = model(proposer(ArgumentMode::Classic), responder(ArgumentMode::Classic, Value::Bad));
    model.propose("agent_a", "agent_b", x()).unwrap();
    let report = model.run(10).unwrap();

    let a = "agent_a".to_string();
    let b = "agent_b".to_string();
    assert_eq!(
        trace(&model),
        vec![
            (a.clone(), Performative::Propose, None),
            (b.clone(), Performative::AskWhy, None),
            (a.clone(), Performative::Argue, cv(CriterionName::Noise, Value::VeryGood)),
            (b.clone(), Performative::Argue, cv(CriterionName::ProductionCost, Value::Bad)),
            (a.clone(), Performative::Argue, cv(CriterionName::ProductionCost, Value::Good)),
            (b.clone(), Performative::Accept, None),
            (a.clone(), Performative::Commit, None),
        ]
    );
    assert_eq!(report.committed, vec!["X".to_string()]);
    assert!(report.quiescent);
}

#[test]
fn test_short_mode_plain_attacker_concedes_first_exchange() {
    let mut model = model(proposer(ArgumentMode::Short), responder(ArgumentMode::Short, Value::Bad));
    model.propose("agent_a", "agent_b", x()).unwrap();
    let report = model.run(10).unwrap();

    let performatives: Vec<Performative> = model.transcript().iter().map(|m| m.performative).collect();
    assert_eq!(
        performatives,
        vec![
            Performative::Propose,
            Performative::AskWhy,
            Performative::Argue,
            Performative::Accept,
            Performative::Commit,
        ]
    );
    assert_eq!(report.committed, vec!["X".to_string()]);
}

#[test]
fn test_short_mode_intensified_attacker_answers() {
    let mut model = model(proposer(ArgumentMode::Short), responder(ArgumentMode::Short, Value::VeryBad));
    model.propose("agent_a", "agent_b", x()).unwrap();
    model.run(10).unwrap();

    let t = trace(&model);
    assert_eq!(t[3], ("agent_b".to_string(), Performative::Argue, cv(CriterionName::ProductionCost, Value::VeryBad)));
    // proposer presses with its weaker premise, then the attacker runs dry
    assert_eq!(t[4], ("agent_a".to_string(), Performative::Argue, cv(CriterionName::ProductionCost, Value::Good)));
    assert_eq!(t[5].1, Performative::Accept);
    assert_eq!(t[6].1, Performative::Commit);
}

#[test]
fn test_exhausted_proposer_refuses_silently() {
    // one supporting premise against two attacking ones
    let prefs_a = Preferences::new(vec![CriterionName::Noise, CriterionName::ProductionCost])
        .with_rating(&x(), CriterionName::Noise, Value::Good)
        .with_rating(&x(), CriterionName::ProductionCost, Value::Bad)
        .with_rating(&y(), CriterionName::Noise, Value::VeryGood)
        .with_rating(&y(), CriterionName::ProductionCost, Value::VeryGood);
    let a = ArgumentAgent::new("agent_a", ArgumentMode::Classic, Arc::new(prefs_a), catalogue());
    let prefs_b = Preferences::new(vec![CriterionName::Noise, CriterionName::ProductionCost])
        .with_rating(&x(), CriterionName::Noise, Value::Bad)
        .with_rating(&x(), CriterionName::ProductionCost, Value::VeryBad)
        .with_rating(&y(), CriterionName::Noise, Value::VeryGood)
        .with_rating(&y(), CriterionName::ProductionCost, Value::VeryGood);
    let b = ArgumentAgent::new("agent_b", ArgumentMode::Classic, Arc::new(prefs_b), catalogue());

    let mut model = model(a, b);
    model.propose("agent_a", "agent_b", x()).unwrap();
    let report = model.run(10).unwrap();

    let performatives: Vec<Performative> = model.transcript().iter().map(|m| m.performative).collect();
    assert_eq!(
        performatives,
        vec![Performative::Propose, Performative::AskWhy, Performative::Argue, Performative::Argue]
    );
    assert!(report.committed.is_empty());
    assert!(report.quiescent);
}

#[test]
fn test_top_decile_item_is_accepted_immediately() {
    let mut model = model(proposer(ArgumentMode::Classic), responder(ArgumentMode::Classic, Value::Bad));
    model.propose("agent_a", "agent_b", y()).unwrap();
    let report = model.run(5).unwrap();

    let performatives: Vec<Performative> = model.transcript().iter().map(|m| m.performative).collect();
    assert_eq!(
        performatives,
        vec![Performative::Propose, Performative::Accept, Performative::Commit]
    );
    assert_eq!(report.committed, vec!["Y".to_string()]);
}

#[test]
fn test_defect_ends_only_its_own_thread() {
    let bus = Arc::new(EventBus::new());
    let mut rx = bus.subscribe();
    // agent_a has nothing favourable to say about X, but both agents love Y
    let a = cost_only("agent_a", ArgumentMode::Classic, Value::Bad);
    let b = responder(ArgumentMode::Classic, Value::Bad);
    let mut model = model(a, b).with_event_bus(bus);
    model.propose("agent_a", "agent_b", x()).unwrap();
    model.propose("agent_b", "agent_a", y()).unwrap();

    let report = model.run(6).unwrap();
    assert_eq!(report.committed, vec!["Y".to_string()]);
    assert!(report.quiescent);

    assert_eq!(report.defects.len(), 1);
    let defect = &report.defects[0];
    assert_eq!(defect.round, 2);
    assert_eq!(defect.agent, "agent_a");
    assert_eq!(defect.item, "X");
    assert_eq!(defect.performative, Performative::AskWhy);
    assert_eq!(model.defects(), &report.defects[..]);

    // nothing was ever argued about X
    assert!(model
        .transcript()
        .iter()
        .all(|m| !(m.item().name == "X" && m.performative == Performative::Argue)));

    let mut defect_items = Vec::new();
    while let Ok(event) = rx.try_recv() {
        if let NegotiationEvent::ProtocolDefect { agent, item, .. } = event {
            assert_eq!(agent, "agent_a");
            defect_items.push(item);
        }
    }
    assert_eq!(defect_items, vec!["X".to_string()]);
}

#[test]
fn test_argue_out_of_order_is_surfaced() {
    let mut a = proposer(ArgumentMode::Classic);
    let msg = Message::argue("agent_b", "agent_a", x(), cv(CriterionName::ProductionCost, Value::Bad));
    assert!(matches!(
        a.handle(&msg),
        Err(NegotiationError::ProtocolOrdering { .. })
    ));
}
