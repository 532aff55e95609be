//! End-to-end tests: authoring capture and merge, seeded application, and
//! depth ordering across overlapping characters.

use std::sync::Arc;

use glam::Vec2;

use paperdoll::color::Color;
use paperdoll::instance::SkinInstance;
use paperdoll::palette::Palette;
use paperdoll::project::Camera2d;
use paperdoll::skeleton::{Skeleton, SpriteId, SpriteSlot};
use paperdoll::skin::{asset, SkinDefinition};

/// A small villager rig: torso with head and two arms, plus a ground blob.
fn villager() -> Skeleton {
    let mut sk = Skeleton::new_posable("villager");
    let torso = sk.add_sprite_bone(sk.root(), "torso", SpriteSlot::new(Some(SpriteId(1)), 2));
    sk.add_sprite_bone(torso, "head", SpriteSlot::new(Some(SpriteId(2)), 3));
    sk.add_sprite_bone(torso, "arm_l", SpriteSlot::new(Some(SpriteId(3)), 4));
    sk.add_sprite_bone(torso, "arm_r", SpriteSlot::new(Some(SpriteId(4)), 1));
    sk.add_sprite_bone(sk.root(), "blob", SpriteSlot::new(Some(SpriteId(5)), 0));
    sk
}

/// Capture a definition from the rig, then grow it with merged variants and
/// a palette-driven tint on the torso.
fn wardrobe() -> SkinDefinition {
    let mut sk = villager();
    let mut definition = SkinDefinition::create_from_skeleton(&sk);

    // The designer swaps sprites on the live rig and merges the new looks in
    for (path, sprite) in [("torso", 11), ("torso/head", 12), ("torso/arm_l", 13)] {
        let id = sk.find_by_path(path).unwrap();
        sk.bone_mut(id).sprite.as_mut().unwrap().sprite = Some(SpriteId(sprite));
    }
    definition.merge(&sk);

    definition.palettes.push(Palette::new(
        "tunic",
        vec![
            Color::rgb(0.8, 0.2, 0.2),
            Color::rgb(0.2, 0.8, 0.2),
            Color::rgb(0.2, 0.2, 0.8),
        ],
    ));
    for variant in &mut definition.variant_groups[0].variants {
        variant.palette = Some(0);
    }
    definition
}

#[test]
fn capture_enumerates_the_rig_in_traversal_order() {
    let definition = SkinDefinition::create_from_skeleton(&villager());
    let paths: Vec<&str> = definition
        .variant_groups
        .iter()
        .map(|g| g.path.as_str())
        .collect();
    assert_eq!(
        paths,
        ["torso", "torso/head", "torso/arm_l", "torso/arm_r", "blob"]
    );
    assert!(definition.variant_groups.iter().all(|g| g.variants.len() == 1));
}

#[test]
fn merge_grows_only_the_swapped_bones() {
    let definition = wardrobe();
    let counts: Vec<usize> = definition
        .variant_groups
        .iter()
        .map(|g| g.variants.len())
        .collect();
    assert_eq!(counts, [2, 2, 2, 1, 1]);
}

#[test]
fn merging_the_same_rig_again_changes_nothing() {
    let mut definition = wardrobe();
    let before = definition.clone();
    definition.merge(&villager());
    assert_eq!(definition, before);
}

#[test]
fn same_seed_means_same_outfit_across_spawns() {
    let skins = vec![Arc::new(wardrobe())];
    let first = SkinInstance::spawn(villager(), skins.clone(), Some(1234), 0.0);
    let second = SkinInstance::spawn(villager(), skins, Some(1234), 0.0);

    for (&a, &b) in first.renderers().iter().zip(second.renderers()) {
        let sa = first.skeleton().bone(a).sprite.unwrap();
        let sb = second.skeleton().bone(b).sprite.unwrap();
        assert_eq!(sa.sprite, sb.sprite);
        assert_eq!(sa.color, sb.color);
    }
}

#[test]
fn tunic_tint_comes_from_the_palette() {
    let definition = wardrobe();
    let mut sk = villager();
    let renderers = sk.sprite_bones();
    definition.apply_random(&mut sk, &renderers, 77);

    let torso = sk.find_by_path("torso").unwrap();
    let tint = sk.bone(torso).sprite.unwrap().color;
    assert_eq!(tint, definition.palettes[0].select_random_color(77));
    assert!(definition.palettes[0].colors.contains(&tint));
}

#[test]
fn lower_character_draws_over_the_higher_one() {
    let skins = vec![Arc::new(wardrobe())];
    let camera = Camera2d::new(Vec2::ZERO, 100.0, (1280, 720));

    let mut upper = SkinInstance::spawn(villager(), skins.clone(), Some(1), -0.5);
    let mut lower = SkinInstance::spawn(villager(), skins, Some(2), -0.5);
    let lower_root = lower.skeleton().root();
    lower.skeleton_mut().bone_mut(lower_root).transform.translation.y = -2.0;

    upper.update(Some(&camera));
    lower.update(Some(&camera));

    let orders = |instance: &SkinInstance| -> Vec<i32> {
        instance
            .renderers()
            .iter()
            .map(|&id| instance.skeleton().bone(id).sprite.unwrap().draw_order)
            .collect()
    };
    let max_upper = orders(&upper).into_iter().max().unwrap();
    let min_lower = orders(&lower).into_iter().min().unwrap();
    assert!(
        min_lower > max_upper,
        "every bone of the lower character must draw over the upper one \
         (upper max {max_upper}, lower min {min_lower})"
    );
}

#[test]
fn a_persisted_wardrobe_behaves_like_the_original() {
    let definition = wardrobe();
    let restored = asset::from_json(&asset::to_json(&definition).unwrap()).unwrap();

    let mut a = villager();
    let mut b = villager();
    let renderers = a.sprite_bones();
    definition.apply_random(&mut a, &renderers, 555);
    restored.apply_random(&mut b, &renderers, 555);

    for &id in &renderers {
        assert_eq!(a.bone(id).sprite.unwrap(), b.bone(id).sprite.unwrap());
        assert_eq!(a.bone(id).transform, b.bone(id).transform);
    }
}
