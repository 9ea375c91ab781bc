// Host-side tests for the facing → image table and the active image holder.

use irc_core::*;

fn table() -> ImageTable {
    ImageTable::from_base(DEFAULT_IMAGE_BASE)
}

#[test]
fn templated_paths_match_the_asset_layout() {
    let right = ImageSet::templated("/public/templates", Facing::Right);
    assert_eq!(right.ground_state, "/public/templates/right_gs.png");
    assert_eq!(right.transition_state, "/public/templates/right_ts.png");
    assert_eq!(right.product, "/public/templates/right_pr.png");

    // trailing slash on the base is tolerated
    let up = ImageSet::templated("/assets/", Facing::Up);
    assert_eq!(up.ground_state, "/assets/up_gs.png");
}

#[test]
fn table_has_eighteen_distinct_paths() {
    let t = table();
    let mut all: Vec<&str> = Facing::ALL
        .iter()
        .flat_map(|&f| {
            let s = t.get(f);
            [
                s.ground_state.as_str(),
                s.transition_state.as_str(),
                s.product.as_str(),
            ]
        })
        .collect();
    all.sort_unstable();
    all.dedup();
    assert_eq!(all.len(), 18);
}

#[test]
fn starts_on_the_initial_facing() {
    let t = table();
    let active = ActiveImages::new(Facing::Right, &t);
    assert_eq!(active.current_facing(), Facing::Right);
    assert_eq!(active.active(), t.get(Facing::Right));
}

#[test]
fn same_facing_is_a_noop() {
    let t = table();
    let mut active = ActiveImages::new(Facing::Right, &t);
    assert!(!active.set_facing(Facing::Right, &t));
    assert!(!active.set_facing(Facing::Right, &t));
    assert_eq!(active.active(), t.get(Facing::Right));
}

#[test]
fn new_facing_replaces_all_three_paths() {
    let t = table();
    let mut active = ActiveImages::new(Facing::Right, &t);
    assert!(active.set_facing(Facing::Up, &t));
    assert_eq!(active.current_facing(), Facing::Up);
    assert_eq!(active.active().ground_state, "/public/templates/up_gs.png");
    assert_eq!(active.active().transition_state, "/public/templates/up_ts.png");
    assert_eq!(active.active().product, "/public/templates/up_pr.png");
}

#[test]
fn right_front_right_restores_the_original_triple() {
    let t = table();
    let mut active = ActiveImages::new(Facing::Right, &t);
    let original = active.active().clone();
    assert!(active.set_facing(Facing::Front, &t));
    assert_ne!(active.active(), &original);
    assert!(active.set_facing(Facing::Right, &t));
    assert_eq!(active.active(), &original);
    assert_eq!(active.current_facing(), Facing::Right);
}

#[test]
fn ground_state_path_is_the_change_sentinel() {
    // Front and Back share a ground-state image but differ otherwise
    let t = ImageTable::from_fn(|f| match f {
        Facing::Front | Facing::Back => {
            ImageSet::new("shared_gs.png", format!("{f}_ts.png"), format!("{f}_pr.png"))
        }
        _ => ImageSet::templated("/t", f),
    });
    let mut active = ActiveImages::new(Facing::Front, &t);
    assert!(!active.set_facing(Facing::Back, &t));
    assert_eq!(active.current_facing(), Facing::Front);
    assert_eq!(active.active().transition_state, "front_ts.png");

    assert!(active.set_facing(Facing::Left, &t));
    assert_eq!(active.current_facing(), Facing::Left);
}
