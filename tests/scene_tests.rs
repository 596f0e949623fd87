// Host-side tests for the scene graph, session bookkeeping, and the
// model cross-fade. The main crate is wasm-only, so we include the
// pure-Rust modules directly, preserving their relative layout.

#![allow(dead_code)]
mod sim {
    pub mod scene {
        include!("../src/core/scene.rs");
    }
    pub mod session {
        include!("../src/core/session.rs");
    }
    pub mod transition {
        include!("../src/core/transition.rs");
    }
}

use sim::scene::{Material, Mesh, MeshId, Node, Scene, Transform};
use sim::session::{EntryOutcome, Session, TEXT_ENTRY_CAP};
use sim::transition::{
    attach_incoming, apply_fade, complete_swap, FadeProgress, ModelFade, FADE_STEPS,
};

fn renderable(name: &str) -> Node {
    Node {
        name: name.to_string(),
        transform: Transform::default(),
        mesh: Some(Mesh {
            id: MeshId::fresh(),
            positions: vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
            normals: vec![[0.0, 0.0, 1.0]; 3],
            indices: vec![0, 1, 2],
            material: Material::default(),
        }),
        children: Vec::new(),
    }
}

fn asset(name: &str) -> Node {
    let mut root = Node::group(name);
    root.children.push(renderable("part-a"));
    root.children.push(renderable("part-b"));
    root
}

#[test]
fn add_and_remove_roundtrip() {
    let mut scene = Scene::new();
    let a = scene.add(asset("a"));
    let b = scene.add(asset("b"));
    assert_eq!(scene.node_count(), 2);

    let removed = scene.remove(a).unwrap();
    assert_eq!(removed.name, "a");
    assert_eq!(scene.node_count(), 1);
    assert!(scene.get(a).is_none());
    assert!(scene.get(b).is_some());

    // Removing twice is a clean miss.
    assert!(scene.remove(a).is_none());
}

#[test]
fn grouping_nodes_are_not_renderable() {
    let node = asset("model");
    assert!(!node.is_renderable());
    assert!(node.children.iter().all(Node::is_renderable));
}

#[test]
fn set_opacity_reaches_every_material_in_the_subtree() {
    let mut node = asset("model");
    node.set_opacity(0.25);

    let mut seen = 0;
    node.for_each_material_mut(&mut |m| {
        assert_eq!(m.opacity, 0.25);
        assert!(m.transparent);
        seen += 1;
    });
    assert_eq!(seen, 2);

    node.set_opacity(1.0);
    node.for_each_material_mut(&mut |m| assert!(!m.transparent));
}

#[test]
fn for_each_mesh_composes_world_matrices() {
    let mut root = Node::group("root");
    root.transform.translation = glam::Vec3::new(10.0, 0.0, 0.0);
    let mut child = renderable("child");
    child.transform.translation = glam::Vec3::new(0.0, 5.0, 0.0);
    root.children.push(child);

    let mut scene = Scene::new();
    scene.add(root);

    let mut worlds = Vec::new();
    scene.for_each_mesh(&mut |_, world| worlds.push(world));
    assert_eq!(worlds.len(), 1);
    let origin = worlds[0].transform_point3(glam::Vec3::ZERO);
    assert!((origin - glam::Vec3::new(10.0, 5.0, 0.0)).length() < 1e-5);
}

#[test]
fn cloned_assets_share_mesh_ids() {
    let original = asset("base");
    let replica = original.clone();
    let id_of = |n: &Node| n.children[0].mesh.as_ref().unwrap().id;
    assert_eq!(id_of(&original), id_of(&replica));
    assert_ne!(id_of(&original), renderable("other").mesh.unwrap().id);
}

fn mesh_ids_of(node: &Node) -> Vec<MeshId> {
    node.children
        .iter()
        .filter_map(|c| c.mesh.as_ref().map(|m| m.id))
        .collect()
}

#[test]
fn live_mesh_ids_follow_removal_but_respect_shared_clones() {
    let mut scene = Scene::new();
    let base = asset("base");
    let replica = base.clone();
    let shared_ids = mesh_ids_of(&base);
    let other = asset("other");
    let other_ids = mesh_ids_of(&other);

    let a = scene.add(base);
    let b = scene.add(replica);
    scene.add(other);

    let live = scene.live_mesh_ids();
    assert!(shared_ids.iter().all(|id| live.contains(id)));
    assert!(other_ids.iter().all(|id| live.contains(id)));

    // One clone gone, the other keeps the shared geometry live.
    scene.remove(a);
    let live = scene.live_mesh_ids();
    assert!(shared_ids.iter().all(|id| live.contains(id)));

    scene.remove(b);
    let live = scene.live_mesh_ids();
    assert!(shared_ids.iter().all(|id| !live.contains(id)));
    assert!(other_ids.iter().all(|id| live.contains(id)));
}

#[test]
fn completed_swap_retires_the_outgoing_meshes() {
    let mut scene = Scene::new();
    let mut session = Session::new();

    let old_asset = asset("current");
    let old_ids = mesh_ids_of(&old_asset);
    let old = scene.add(old_asset);
    session.current_model = Some(old);

    let new_asset = asset("next");
    let new_ids = mesh_ids_of(&new_asset);
    let incoming = attach_incoming(&mut scene, new_asset);
    complete_swap(&mut scene, &mut session, incoming);

    let live = scene.live_mesh_ids();
    assert!(old_ids.iter().all(|id| !live.contains(id)));
    assert!(new_ids.iter().all(|id| live.contains(id)));
}

#[test]
fn tenth_entry_triggers_the_swap_exactly_once() {
    let mut session = Session::new();

    for n in 1..TEXT_ENTRY_CAP {
        match session.register_entry() {
            EntryOutcome::Created { swap_now } => assert!(!swap_now, "entry {n} swapped early"),
            EntryOutcome::CapReached => panic!("cap hit at entry {n}"),
        }
    }

    assert_eq!(
        session.register_entry(),
        EntryOutcome::Created { swap_now: true }
    );
    assert!(session.at_cap());
    assert_eq!(session.entry_count(), TEXT_ENTRY_CAP);

    // Entries past the cap are ignored and never re-trigger the swap.
    assert_eq!(session.register_entry(), EntryOutcome::CapReached);
    assert_eq!(session.entry_count(), TEXT_ENTRY_CAP);
}

#[test]
fn fade_reaches_full_opacity_in_exact_steps() {
    let mut fade = ModelFade::new();
    assert_eq!(fade.opacity(), 0.0);

    let mut ticks = 0;
    loop {
        ticks += 1;
        match fade.step() {
            FadeProgress::Fading(o) => {
                assert!(o > 0.0 && o < 1.0);
                assert!(ticks < FADE_STEPS);
            }
            FadeProgress::Complete => break,
        }
    }
    assert_eq!(ticks, FADE_STEPS);
    assert_eq!(fade.opacity(), 1.0);

    // Stray ticks after completion stay complete.
    assert_eq!(fade.step(), FadeProgress::Complete);
}

#[test]
fn attach_starts_invisible_and_fade_drives_opacity() {
    let mut scene = Scene::new();
    let incoming = attach_incoming(&mut scene, asset("next"));

    scene.get(incoming).unwrap().for_each_mesh(glam::Mat4::IDENTITY, &mut |mesh, _| {
        assert_eq!(mesh.material.opacity, 0.0);
        assert!(mesh.material.transparent);
    });

    apply_fade(&mut scene, incoming, 0.5);
    scene.get(incoming).unwrap().for_each_mesh(glam::Mat4::IDENTITY, &mut |mesh, _| {
        assert_eq!(mesh.material.opacity, 0.5);
    });
}

#[test]
fn complete_swap_replaces_the_current_model() {
    let mut scene = Scene::new();
    let mut session = Session::new();

    let old = scene.add(asset("current"));
    session.current_model = Some(old);

    let incoming = attach_incoming(&mut scene, asset("next"));
    assert_eq!(scene.node_count(), 2);

    let detached = complete_swap(&mut scene, &mut session, incoming).unwrap();
    assert_eq!(detached.name, "current");
    assert_eq!(scene.node_count(), 1);
    assert_eq!(session.current_model, Some(incoming));
    scene.get(incoming).unwrap().for_each_mesh(glam::Mat4::IDENTITY, &mut |mesh, _| {
        assert_eq!(mesh.material.opacity, 1.0);
        assert!(!mesh.material.transparent);
    });
}

#[test]
fn complete_swap_without_a_prior_model_still_installs_the_new_one() {
    let mut scene = Scene::new();
    let mut session = Session::new();

    let incoming = attach_incoming(&mut scene, asset("first"));
    assert!(complete_swap(&mut scene, &mut session, incoming).is_none());
    assert_eq!(session.current_model, Some(incoming));
    assert_eq!(scene.node_count(), 1);
}

#[test]
fn failed_replacement_load_leaves_the_scene_untouched() {
    let mut scene = Scene::new();
    let mut session = Session::new();
    let current = scene.add(asset("current"));
    session.current_model = Some(current);

    // Nothing attaches unless the load actually produced an asset.
    let loaded: Result<Node, &str> = Err("not found");
    if let Ok(node) = loaded {
        attach_incoming(&mut scene, node);
    }

    assert_eq!(scene.node_count(), 1);
    assert_eq!(session.current_model, Some(current));
    assert_eq!(session.entry_count(), 0);
}

#[test]
fn fade_against_a_vanished_node_is_harmless() {
    let mut scene = Scene::new();
    let incoming = attach_incoming(&mut scene, asset("next"));
    scene.remove(incoming);

    apply_fade(&mut scene, incoming, 0.7);
    assert_eq!(scene.node_count(), 0);
}
