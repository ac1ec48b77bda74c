use std::env;
use std::fs;

use crate::fixtures::{game_universe, player};
use crate::selection::{create_container, load_selection, save_selection, SelectionInfo};
use crate::validation::ExternalValidation;
use crate::SelectionError;

fn snapshot() -> SelectionInfo {
    SelectionInfo::from_type(&player(), &ExternalValidation::new())
}

#[test]
fn snapshot_records_eligible_members_fields_first_all_active() {
    let info = snapshot();

    assert_eq!(info.type_name, "Game.Player");
    let names: Vec<&str> = info
        .members
        .iter()
        .map(|member| member.name.as_str())
        .collect();
    assert_eq!(names, ["Position", "Health", "Name"]);
    assert!(info.members.iter().all(|member| member.active));
}

#[test]
fn json_round_trip_is_stable() {
    let info = snapshot();
    let text = info.to_json();

    assert_eq!(SelectionInfo::from_json(&text), Some(info.clone()));
    assert_eq!(SelectionInfo::from_json(&text).unwrap().to_json(), text);
}

#[test]
fn json_field_order_is_fixed() {
    let mut info = snapshot();
    info.members.truncate(1);

    let expected = "\
{
  \"typeName\": \"Game.Player\",
  \"members\": [
    {
      \"active\": true,
      \"name\": \"Position\"
    }
  ]
}
";
    assert_eq!(info.to_json(), expected);
}

#[test]
fn from_json_rejects_garbage_and_duplicate_member_names() {
    assert_eq!(SelectionInfo::from_json("not json"), None);
    assert_eq!(SelectionInfo::from_json("{}"), None);

    let duplicated = "\
{
  \"typeName\": \"Game.Player\",
  \"members\": [
    { \"active\": true, \"name\": \"Health\" },
    { \"active\": false, \"name\": \"Health\" }
  ]
}
";
    assert_eq!(SelectionInfo::from_json(duplicated), None);
}

#[test]
fn create_container_skips_inactive_members() {
    let universe = game_universe();
    let mut info = snapshot();
    for member in &mut info.members {
        if member.name == "Health" {
            member.active = false;
        }
    }

    let container = create_container(&info, &ExternalValidation::new(), &universe).unwrap();
    let names: Vec<&str> = container
        .members()
        .iter()
        .map(|member| member.name.as_str())
        .collect();
    assert_eq!(names, ["Position", "Name"]);
}

#[test]
fn create_container_skips_members_missing_from_the_record() {
    let universe = game_universe();
    let mut info = snapshot();
    info.members.retain(|member| member.name != "Name");

    let container = create_container(&info, &ExternalValidation::new(), &universe).unwrap();
    let names: Vec<&str> = container
        .members()
        .iter()
        .map(|member| member.name.as_str())
        .collect();
    assert_eq!(names, ["Position", "Health"]);
}

#[test]
fn create_container_drops_members_that_drifted_off_the_type() {
    let universe = game_universe();
    let mut info = snapshot();
    info.members.push(crate::SelectionMember {
        active: true,
        name: "Removed".to_owned(),
    });

    let container = create_container(&info, &ExternalValidation::new(), &universe).unwrap();
    assert!(container.get("Removed").is_none());
    assert_eq!(container.members().len(), 3);
}

#[test]
fn create_container_fails_hard_when_the_target_is_gone() {
    let universe = game_universe();
    let mut info = snapshot();
    info.type_name = "Game.Deleted".to_owned();

    assert_eq!(
        create_container(&info, &ExternalValidation::new(), &universe),
        Err(SelectionError::TargetNotFound {
            name: "Game.Deleted".to_owned()
        })
    );
}

#[test]
fn empty_target_name_never_resolves() {
    let universe = game_universe();
    let mut info = snapshot();
    info.type_name = String::new();

    assert!(info.target_type(&universe).is_none());
    assert!(create_container(&info, &ExternalValidation::new(), &universe).is_err());
}

#[test]
fn round_trip_through_create_container_matches_a_direct_build() {
    let universe = game_universe();
    let validation = ExternalValidation::new();

    let rebuilt = create_container(&snapshot(), &validation, &universe).unwrap();
    let direct = crate::build(&player(), &validation, &universe);
    assert_eq!(rebuilt, direct);
}

#[test]
fn selection_files_round_trip_and_missing_files_yield_none() {
    let path = env::temp_dir().join(format!("husk-selection-{}.json", std::process::id()));
    let info = snapshot();

    save_selection(&path, &info).unwrap();
    assert_eq!(load_selection(&path), Some(info));
    fs::remove_file(&path).unwrap();

    assert_eq!(load_selection(&path), None);
}
