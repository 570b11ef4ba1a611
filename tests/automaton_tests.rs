//! End-to-end tests exercising the public API the way a host program
//! would: declare, validate, instantiate, drive, introspect, render.

use automaton::render::{state_graph, transition_table, TableFormat};
use automaton::{
    Automaton, Definition, DefinitionBuilder, DefinitionError, InvalidStateError, TransitionError,
};
use std::sync::Arc;

fn traffic_light() -> Arc<Definition<&'static str>> {
    Arc::new(
        DefinitionBuilder::new()
            .event("go", ["red"], "green")
            .event("slowdown", ["green"], "yellow")
            .event("stop", ["yellow"], "red")
            .initial_state("red")
            .accepting_states(["red", "green"])
            .build()
            .unwrap(),
    )
}

#[test]
fn traffic_light_drives_through_its_cycle() {
    let mut crossroads = Automaton::new(traffic_light()).unwrap();

    assert_eq!(crossroads.current_state(), &"red");
    crossroads.trigger("go").unwrap();
    assert_eq!(crossroads.current_state(), &"green");
    crossroads.trigger("slowdown").unwrap();
    assert_eq!(crossroads.current_state(), &"yellow");
    crossroads.trigger("stop").unwrap();
    assert_eq!(crossroads.current_state(), &"red");
    crossroads.trigger("go").unwrap();

    // Invalid transitions leave the machine where it was.
    assert!(matches!(
        crossroads.trigger("stop"),
        Err(TransitionError::InvalidTransition { .. })
    ));
    assert_eq!(crossroads.current_state(), &"green");
    assert!(matches!(
        crossroads.trigger("unknown"),
        Err(TransitionError::UnknownEvent { .. })
    ));
    assert_eq!(crossroads.current_state(), &"green");
}

#[test]
fn acceptance_tracks_the_effective_accepting_set() {
    let mut crossroads = Automaton::new(traffic_light()).unwrap();
    assert!(crossroads.is_accepted());
    crossroads.trigger("go").unwrap();
    crossroads.trigger("slowdown").unwrap();
    assert!(!crossroads.is_accepted());

    let mut custom = Automaton::new(traffic_light())
        .unwrap()
        .with_accepting_states(["yellow"])
        .unwrap();
    assert!(!custom.is_accepted());
    custom.trigger("go").unwrap();
    custom.trigger("slowdown").unwrap();
    assert!(custom.is_accepted());
}

#[test]
fn initial_state_variants() {
    let definition = traffic_light();

    let by_default = Automaton::new(Arc::clone(&definition)).unwrap();
    assert_eq!(by_default.current_state(), &"red");

    let by_state = Automaton::with_initial_state(Arc::clone(&definition), "yellow").unwrap();
    assert_eq!(by_state.current_state(), &"yellow");

    let by_event = Automaton::with_initial_event(Arc::clone(&definition), "go").unwrap();
    assert_eq!(by_event.current_state(), &"green");

    assert_eq!(
        Automaton::with_initial_state(Arc::clone(&definition), "blue").unwrap_err(),
        InvalidStateError::Unknown { state: "blue" }
    );
}

#[test]
fn disconnected_definitions_report_every_island() {
    // Three clusters, no connections.
    let error = DefinitionBuilder::new()
        .event("cluster1_1", ["state_a"], "state_b")
        .event("cluster1_2", ["state_b"], "state_c")
        .event("cluster2_1", ["state_e"], "state_f")
        .event("cluster3_1", ["state_1"], "state_2")
        .event("cluster3_2", ["state_2"], "state_3")
        .event("cluster3_3", ["state_3"], "state_4")
        .build()
        .unwrap_err();

    assert_eq!(
        error,
        DefinitionError::DisconnectedGraph {
            components: vec![
                vec!["state_1", "state_2", "state_3", "state_4"],
                vec!["state_a", "state_b", "state_c"],
                vec!["state_e", "state_f"],
            ],
        }
    );

    // Join the clusters and the definition builds.
    let definition = DefinitionBuilder::new()
        .event("cluster1_1", ["state_a"], "state_b")
        .event("cluster1_2", ["state_b"], "state_c")
        .event("cluster2_1", ["state_e"], "state_f")
        .event("cluster3_1", ["state_1"], "state_2")
        .event("conn_1_2", ["state_c"], "state_e")
        .event("conn_2_3", ["state_f"], "state_1")
        .build()
        .unwrap();
    assert_eq!(definition.state_count(), 8);
}

#[test]
fn layered_sinks_with_a_loop_back() {
    let definition = Arc::new(
        DefinitionBuilder::new()
            .event("event1", ["state_a"], "state_b")
            .event(
                "event2",
                ["state_a", "state_b", "state_c", "state_d"],
                "sink1",
            )
            .event(
                "event3",
                ["state_a", "state_b", "state_c", "state_d", "sink1"],
                "sink2",
            )
            .event("event4", ["sink2"], "state_a")
            .build()
            .unwrap(),
    );

    let mut machine = Automaton::with_initial_state(Arc::clone(&definition), "state_a").unwrap();
    for _ in 0..2 {
        machine.trigger("event1").unwrap();
        assert_eq!(machine.current_state(), &"state_b");
        machine.trigger("event2").unwrap();
        assert_eq!(machine.current_state(), &"sink1");
        machine.trigger("event3").unwrap();
        assert_eq!(machine.current_state(), &"sink2");
        machine.trigger("event4").unwrap();
        assert_eq!(machine.current_state(), &"state_a");
    }
}

#[test]
fn cut_queries_over_a_star() {
    let leaves = ["state_a", "state_b", "state_c", "state_d", "state_e"];
    let definition = DefinitionBuilder::new()
        .event("collapse", leaves, "center")
        .event("collapse2", ["state_f"], "center")
        .build()
        .unwrap();

    for leaf in &leaves {
        assert!(definition.in_events([leaf]).unwrap().is_empty());
        assert_eq!(definition.out_events([leaf]).unwrap(), vec!["collapse"]);
    }
    assert_eq!(
        definition.in_events([&"center"]).unwrap(),
        vec!["collapse", "collapse2"]
    );
    assert_eq!(definition.out_events(leaves.iter()).unwrap(), vec!["collapse"]);
    assert!(definition
        .in_events([&"unknown1", &"center"])
        .is_err());
}

#[test]
fn definition_exports_to_json() {
    let definition = traffic_light();

    let events: Vec<_> = definition.events().collect();
    let json = serde_json::to_value(&events).unwrap();

    assert_eq!(json[0]["name"], "go");
    assert_eq!(json[0]["sources"][0], "red");
    assert_eq!(json[2]["dest"], "red");
}

#[test]
fn renderers_consume_the_query_surface() {
    let definition = traffic_light();

    let table = transition_table(&definition, TableFormat::Rst);
    assert_eq!(table.lines().count(), 7);
    assert!(table.contains("go"));

    let markdown = transition_table(&definition, TableFormat::Markdown);
    assert!(markdown.starts_with("| Source"));

    let diagram = state_graph(&definition);
    assert!(diagram.starts_with("@startuml"));
    assert!(diagram.contains("red --> green : go"));
}

#[test]
fn shared_definition_is_usable_across_threads() {
    let definition = traffic_light();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let definition = Arc::clone(&definition);
            std::thread::spawn(move || {
                let mut light = Automaton::new(definition).unwrap();
                light.trigger("go").unwrap();
                *light.current_state()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), "green");
    }
}
