use super::*;

#[test]
fn names_round_trip() {
    for action in Action::ALL {
        assert_eq!(Action::from_name(action.name()), Some(action));
    }
    assert_eq!(Action::from_name("demoAddCall"), None);
    assert_eq!(Action::InsertBefore.to_string(), "insertBefore");
}

#[test]
fn menu_groups_every_action_once() {
    let menu = context_menu();
    let separators = menu.iter().filter(|e| **e == MenuEntry::Separator).count();
    assert_eq!(separators, 3);
    let actions: Vec<Action> = menu
        .iter()
        .filter_map(|e| match e {
            MenuEntry::Item { action, .. } => Some(*action),
            MenuEntry::Separator => None,
        })
        .collect();
    assert_eq!(actions, Action::ALL.to_vec());
    assert_eq!(
        menu[0],
        MenuEntry::Item {
            action: Action::Edit,
            label: "Edit...",
            key: "Enter"
        }
    );
    assert_eq!(menu[2], MenuEntry::Separator);
}

#[test]
fn shortcuts_are_distinct() {
    let mut keys: Vec<&str> = Action::ALL.iter().map(|a| a.key()).collect();
    keys.sort_unstable();
    keys.dedup();
    assert_eq!(keys.len(), Action::ALL.len());
}
