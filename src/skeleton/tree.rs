use crate::check;

use super::node::{Bone, BoneId, SpriteSlot};

/// Capability tags a bone can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Root marker: the tree is a posable skeleton that authoring
    /// operations may capture or merge from.
    PosableSkeleton,
    /// The bone carries a sprite slot the backend renders.
    SpriteRenderer,
}

/// Bone lists per capability, built once per skeleton and queried by value
/// so the per-frame path never walks the tree.
#[derive(Debug, Clone, Default)]
pub struct CapabilityRegistry {
    posable_roots: Vec<BoneId>,
    sprite_bones: Vec<BoneId>,
}

impl CapabilityRegistry {
    /// Bones carrying `capability`, in deterministic depth-first order.
    pub fn bones(&self, capability: Capability) -> &[BoneId] {
        match capability {
            Capability::PosableSkeleton => &self.posable_roots,
            Capability::SpriteRenderer => &self.sprite_bones,
        }
    }
}

/// A tree of named bones with a fixed root.
///
/// Children keep insertion order, which fixes the depth-first traversal
/// order for the lifetime of the skeleton.
#[derive(Debug, Clone)]
pub struct Skeleton {
    bones: Vec<Bone>,
    posable: bool,
}

impl Skeleton {
    /// Create a skeleton whose root does not carry the posable marker.
    pub fn new(root_name: &str) -> Self {
        Self {
            bones: vec![Bone::new(root_name, None, None)],
            posable: false,
        }
    }

    /// Create a posable skeleton: one the authoring operations accept.
    pub fn new_posable(root_name: &str) -> Self {
        Self {
            posable: true,
            ..Self::new(root_name)
        }
    }

    pub fn root(&self) -> BoneId {
        BoneId(0)
    }

    /// Whether the root carries the posable-skeleton marker.
    pub fn is_posable(&self) -> bool {
        self.posable
    }

    pub fn bone(&self, id: BoneId) -> &Bone {
        &self.bones[id.0 as usize]
    }

    pub fn bone_mut(&mut self, id: BoneId) -> &mut Bone {
        &mut self.bones[id.0 as usize]
    }

    pub fn len(&self) -> usize {
        self.bones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bones.is_empty()
    }

    /// Add a plain grouping bone under `parent`.
    pub fn add_bone(&mut self, parent: BoneId, name: &str) -> BoneId {
        self.insert(parent, Bone::new(name, Some(parent), None))
    }

    /// Add a bone carrying a sprite slot under `parent`.
    pub fn add_sprite_bone(&mut self, parent: BoneId, name: &str, slot: SpriteSlot) -> BoneId {
        self.insert(parent, Bone::new(name, Some(parent), Some(slot)))
    }

    fn insert(&mut self, parent: BoneId, bone: Bone) -> BoneId {
        let id = BoneId(self.bones.len() as u32);
        self.bones.push(bone);
        self.bones[parent.0 as usize].children.push(id);
        id
    }

    /// Resolve a "/"-separated chain of names, starting at the root's
    /// children. At each level the first child with a matching name wins,
    /// so duplicate names resolve deterministically.
    ///
    /// # Panics
    /// In strict mode, panics when `path` is empty.
    pub fn find_by_path(&self, path: &str) -> Option<BoneId> {
        check::require(
            !path.is_empty(),
            "cannot find a bone without a valid path",
        );
        let mut current = self.root();
        for segment in path.split('/') {
            current = *self
                .bone(current)
                .children
                .iter()
                .find(|&&child| self.bone(child).name == segment)?;
        }
        Some(current)
    }

    /// The "/"-joined chain of names from (excluding) the root down to
    /// `bone`: the inverse of [`find_by_path`](Self::find_by_path) while
    /// names along the chain are unambiguous.
    ///
    /// # Panics
    /// In strict mode, panics when `bone` is the root itself.
    pub fn path_to(&self, bone: BoneId) -> String {
        check::require(
            bone != self.root(),
            "cannot create a path from the root to itself",
        );
        let mut segments = Vec::new();
        let mut current = bone;
        while current != self.root() {
            segments.push(self.bone(current).name.as_str());
            match self.bone(current).parent {
                Some(parent) => current = parent,
                None => break,
            }
        }
        segments.reverse();
        segments.join("/")
    }

    /// Every descendant carrying a sprite slot, in deterministic
    /// depth-first preorder: parent before children, siblings in insertion
    /// order, root excluded. Authoring capture and runtime application must
    /// both observe this exact sequence.
    pub fn sprite_bones(&self) -> Vec<BoneId> {
        let mut out = Vec::new();
        self.collect_sprite_bones(self.root(), &mut out);
        out
    }

    fn collect_sprite_bones(&self, id: BoneId, out: &mut Vec<BoneId>) {
        for &child in &self.bone(id).children {
            if self.bone(child).sprite.is_some() {
                out.push(child);
            }
            self.collect_sprite_bones(child, out);
        }
    }

    /// Build the capability registry for this skeleton. Build it once per
    /// instance and query it by value afterwards.
    pub fn registry(&self) -> CapabilityRegistry {
        CapabilityRegistry {
            posable_roots: if self.posable {
                vec![self.root()]
            } else {
                Vec::new()
            },
            sprite_bones: self.sprite_bones(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skeleton::SpriteId;

    /// torso(sprite) -> arm_l(sprite) -> hand_l(sprite)
    ///               -> arm_r(sprite)
    /// shadow(plain) -> blob(sprite)
    fn humanoid() -> Skeleton {
        let mut sk = Skeleton::new_posable("character");
        let torso = sk.add_sprite_bone(sk.root(), "torso", SpriteSlot::new(Some(SpriteId(1)), 0));
        let arm_l = sk.add_sprite_bone(torso, "arm_l", SpriteSlot::new(Some(SpriteId(2)), 1));
        sk.add_sprite_bone(arm_l, "hand_l", SpriteSlot::new(Some(SpriteId(3)), 2));
        sk.add_sprite_bone(torso, "arm_r", SpriteSlot::new(Some(SpriteId(4)), 3));
        let shadow = sk.add_bone(sk.root(), "shadow");
        sk.add_sprite_bone(shadow, "blob", SpriteSlot::new(Some(SpriteId(5)), 4));
        sk
    }

    #[test]
    fn sprite_bones_are_depth_first_preorder() {
        let sk = humanoid();
        let names: Vec<&str> = sk
            .sprite_bones()
            .iter()
            .map(|&id| sk.bone(id).name())
            .collect();
        assert_eq!(names, ["torso", "arm_l", "hand_l", "arm_r", "blob"]);
    }

    #[test]
    fn plain_bones_are_not_enumerated() {
        let sk = humanoid();
        assert!(sk
            .sprite_bones()
            .iter()
            .all(|&id| sk.bone(id).name() != "shadow"));
    }

    #[test]
    fn find_by_path_resolves_nested_bones() {
        let sk = humanoid();
        let hand = sk.find_by_path("torso/arm_l/hand_l").unwrap();
        assert_eq!(sk.bone(hand).name(), "hand_l");
        assert_eq!(sk.find_by_path("torso/arm_l/foot"), None);
        assert_eq!(sk.find_by_path("no_such_bone"), None);
    }

    #[test]
    fn path_to_inverts_find_by_path() {
        let sk = humanoid();
        for &id in &sk.sprite_bones() {
            let path = sk.path_to(id);
            assert_eq!(sk.find_by_path(&path), Some(id));
        }
        assert_eq!(
            sk.path_to(sk.find_by_path("torso/arm_l/hand_l").unwrap()),
            "torso/arm_l/hand_l"
        );
    }

    #[test]
    fn duplicate_names_resolve_to_first_match() {
        let mut sk = Skeleton::new("root");
        let first = sk.add_sprite_bone(sk.root(), "twin", SpriteSlot::new(Some(SpriteId(1)), 0));
        sk.add_sprite_bone(sk.root(), "twin", SpriteSlot::new(Some(SpriteId(2)), 1));
        assert_eq!(sk.find_by_path("twin"), Some(first));
    }

    #[test]
    fn registry_matches_traversal() {
        let sk = humanoid();
        let registry = sk.registry();
        assert_eq!(registry.bones(Capability::SpriteRenderer), sk.sprite_bones());
        assert_eq!(registry.bones(Capability::PosableSkeleton), [sk.root()]);

        let plain = Skeleton::new("not posable");
        assert!(plain
            .registry()
            .bones(Capability::PosableSkeleton)
            .is_empty());
    }

    #[test]
    #[should_panic(expected = "precondition violated")]
    fn empty_path_is_fatal_in_strict_mode() {
        humanoid().find_by_path("");
    }

    #[test]
    #[should_panic(expected = "precondition violated")]
    fn path_to_root_is_fatal_in_strict_mode() {
        let sk = humanoid();
        sk.path_to(sk.root());
    }
}
