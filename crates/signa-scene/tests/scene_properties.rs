//! Property tests for scene export

use proptest::prelude::*;
use signa_core::{GlossSequence, Side};
use signa_pose::PoseGenerator;
use signa_scene::{AvatarConfig, SceneConfig, SceneExporter};

const GLOSSES: &[&str] = &[
    "HELLO", "GOODBYE", "THANK", "PLEASE", "HAPPY", "YOU", "FS-A", "FS-K", "FS-E", "LOVE",
];

fn gloss_ids() -> impl Strategy<Value = Vec<&'static str>> {
    prop::collection::vec(prop::sample::select(GLOSSES), 0..5)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_bounding_box_contains_every_position(
        ids in gloss_ids(),
        millis in 100u32..1500,
        face in any::<bool>(),
        hands in any::<bool>(),
    ) {
        let anim = PoseGenerator::new(30)
            .generate(GlossSequence::from_glosses(ids.as_slice()), millis as f64 / 1000.0)
            .unwrap();
        let config = SceneConfig {
            avatar: AvatarConfig {
                show_face_mesh: face,
                show_hand_details: hands,
                ..AvatarConfig::default()
            },
            ..SceneConfig::default()
        };
        let scene = SceneExporter::new(config).export(&anim);

        prop_assert_eq!(scene.frames().len(), anim.frame_count());
        for frame in scene.frames() {
            let bb = frame.bounding_box;
            prop_assert!(bb.min_x <= bb.max_x && bb.min_y <= bb.max_y && bb.min_z <= bb.max_z);
            for p in frame.positions() {
                prop_assert!(bb.contains(p), "{:?} outside {:?}", p, bb);
            }
            prop_assert_eq!(frame.face.is_some(), face);
            prop_assert_eq!(frame.hands.left.is_some(), hands);
        }
    }

    #[test]
    fn prop_rigs_mirror_pose_frames(ids in gloss_ids(), index in 0usize..30) {
        let anim = PoseGenerator::new(30)
            .generate(GlossSequence::from_glosses(ids.as_slice()), 1.0)
            .unwrap();
        let scene = SceneExporter::default().export(&anim);

        let pose = &anim.frames()[index];
        let rig = &scene.frames()[index];
        prop_assert_eq!(rig.frame_index, pose.frame_index);
        for (joint, kp) in rig.body.joints.iter().zip(pose.body_keypoints.iter()) {
            prop_assert_eq!(joint.position, kp.position());
        }
        let right = rig.hands.right.as_ref().unwrap();
        prop_assert_eq!(right.side, Side::Right);
        for bone in &right.bones {
            prop_assert_eq!(bone.start, right.joints[bone.start_joint].position);
            prop_assert_eq!(bone.end, right.joints[bone.end_joint].position);
            prop_assert!(bone.length >= 0.0);
        }
    }
}
