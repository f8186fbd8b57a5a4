//! Systems for loading and finalizing the character model.
use std::collections::HashSet;

use bevy::{gltf::GltfAssetLabel, prelude::*};

use crate::{
    character::components::{Bounds, CharacterAnimation, CharacterBounds, CharacterModel},
    settings::AppSettings,
};

/// Spawns the character scene and prepares its idle animation graph.
pub fn spawn_character_model(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut graphs: ResMut<Assets<AnimationGraph>>,
    settings: Res<AppSettings>,
) {
    let scene: Handle<Scene> =
        asset_server.load(GltfAssetLabel::Scene(0).from_asset(settings.model_scene.clone()));
    commands.spawn((SceneRoot(scene), Transform::default(), CharacterModel));

    let clip = asset_server.load(GltfAssetLabel::Animation(0).from_asset(settings.model_scene.clone()));
    let (graph, node) = AnimationGraph::from_clip(clip);
    commands.insert_resource(CharacterAnimation {
        graph: graphs.add(graph),
        node,
    });

    info!("Loading character scene from {}", settings.model_scene);
}

/// One-shot pass over the freshly spawned character hierarchy: strips the
/// configured nodes, then folds the remaining mesh bounding boxes into the
/// anchor bounds. Runs every frame until the scene spawner has produced
/// meshes, then never again.
pub fn finalize_character_scene(
    mut commands: Commands,
    settings: Res<AppSettings>,
    meshes: Res<Assets<Mesh>>,
    bounds: Option<Res<CharacterBounds>>,
    model: Query<Entity, With<CharacterModel>>,
    children: Query<&Children>,
    names: Query<&Name>,
    mesh_instances: Query<&Mesh3d>,
) {
    if bounds.is_some() {
        return;
    }
    let Ok(root) = model.single() else {
        return;
    };

    let mut hidden_roots = Vec::new();
    for entity in children.iter_descendants(root) {
        if let Ok(name) = names.get(entity) {
            if settings
                .hidden_model_nodes
                .iter()
                .any(|hidden| hidden == name.as_str())
            {
                hidden_roots.push(entity);
            }
        }
    }

    // Hidden subtrees must not contribute to the anchor bounds.
    let mut excluded: HashSet<Entity> = hidden_roots.iter().copied().collect();
    for &hidden in &hidden_roots {
        excluded.extend(children.iter_descendants(hidden));
    }

    let mut mesh_bounds = Vec::new();
    let mut saw_mesh = false;
    for entity in children.iter_descendants(root) {
        if excluded.contains(&entity) {
            continue;
        }
        let Ok(mesh_instance) = mesh_instances.get(entity) else {
            continue;
        };
        saw_mesh = true;
        let Some(mesh) = meshes.get(&mesh_instance.0) else {
            continue;
        };
        let Some(aabb) = mesh.compute_aabb() else {
            continue;
        };
        mesh_bounds.push(Bounds::new(Vec3::from(aabb.min()), Vec3::from(aabb.max())));
    }

    // Scene not spawned yet; try again next frame.
    if !saw_mesh {
        return;
    }

    for entity in hidden_roots {
        if let Ok(name) = names.get(entity) {
            info!("Removing character node {}", name.as_str());
        }
        commands.entity(entity).despawn();
    }

    let Some(folded) = Bounds::enclose_all(mesh_bounds) else {
        warn!("Character scene contains no measurable meshes; bubbles stay disabled");
        return;
    };

    info!(
        "Character bounds ready: min {:?}, max {:?}",
        folded.min(),
        folded.max()
    );
    commands.insert_resource(CharacterBounds::new(folded));
}

/// Hooks the prepared animation graph up to the scene's animation player and
/// starts the clip looping.
pub fn attach_character_animation(
    mut commands: Commands,
    animation: Option<Res<CharacterAnimation>>,
    mut players: Query<(Entity, &mut AnimationPlayer), Added<AnimationPlayer>>,
) {
    let Some(animation) = animation else {
        return;
    };

    for (entity, mut player) in players.iter_mut() {
        commands
            .entity(entity)
            .insert(AnimationGraphHandle(animation.graph.clone()));
        player.play(animation.node).repeat();
        info!("Character animation started");
    }
}
