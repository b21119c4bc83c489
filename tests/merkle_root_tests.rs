//! Root recomputation and node hashing tests
//!
//! Leaf and sibling values are 16-byte, left zero-padded, as in the proof
//! fixtures produced by the aggregation tooling.

use piece_verifier::{
    combine_nodes, compute_root, verify_root, InclusionProof, Node, Root, VerifierError,
    MAX_PATH_DEPTH,
};
use rstest::rstest;

fn node(byte: u8) -> Node {
    Node::left_padded(&[byte])
}

fn path(bytes: &[u8]) -> Vec<Node> {
    bytes.iter().map(|b| node(*b)).collect()
}

// Vectors derived from SHA-256/trunc254 node hashing, not from any external table
#[rstest]
#[case(0x01, &[0x02, 0x03], 0, "5ff34e5a3cb4dba51733e1f038fce5153d5bdd7a9dd9e3cfb09c6a89c201470f")]
#[case(0x01, &[0x02, 0x03], 1, "67fd2d0a96fa446d2fbc5b988f9d52d635a99809db6e0af76a68bb5b37cd1200")]
#[case(0xff, &[0x02, 0x03], 1, "91a8f97555d2a46cf76d404141a43575747084e34596f456426b1d6bd0f4f426")]
#[case(0x01, &[0x02, 0x03], 3, "5c216068ef21ddb29e08f7c9e2b8dcdcb94b74bb1699af7f028fc2cf4423a20b")]
#[case(0x01, &[0x02, 0x03, 0x04], 5, "781136f0a15dd39d838e5c8bf638f88fc13da300b0b1df65f72b6b0fd842f51d")]
#[case(0x01, &[0x02], 0, "78d68721debb423cf880232869a63e2522c3dd6187159cbeb15b3ee7e1592538")]
fn test_compute_root_fixtures(
    #[case] leaf: u8,
    #[case] siblings: &[u8],
    #[case] index: u64,
    #[case] expected: &str,
) {
    let proof = InclusionProof::new(path(siblings), index);
    let root = compute_root(&node(leaf), &proof).unwrap();
    assert_eq!(root.to_hex(), expected);
}

#[rstest]
#[case(&[0x02, 0x03], 4)]
#[case(&[0x02, 0x03, 0x04], 8)]
#[case(&[], 1)]
#[case(&[0x02], u64::MAX)]
fn test_index_out_of_range(#[case] siblings: &[u8], #[case] index: u64) {
    let proof = InclusionProof::new(path(siblings), index);
    let err = compute_root(&node(0x01), &proof).unwrap_err();
    match err {
        VerifierError::IndexOutOfRange { index: i, depth } => {
            assert_eq!(i, index);
            assert_eq!(depth, siblings.len());
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_degenerate_64_level_path_rejected() {
    let proof = InclusionProof::new(vec![Node::zero(); 64], 8);
    assert!(matches!(
        compute_root(&node(0x01), &proof),
        Err(VerifierError::PathTooDeep { depth: 64, max }) if max == MAX_PATH_DEPTH
    ));
}

#[test]
fn test_every_index_below_bound_is_accepted() {
    let siblings = path(&[0x02, 0x03, 0x04]);
    for index in 0..8 {
        let proof = InclusionProof::new(siblings.clone(), index);
        assert!(compute_root(&node(0x01), &proof).is_ok(), "index {}", index);
    }
}

#[test]
fn test_distinct_indices_give_distinct_roots() {
    let siblings = path(&[0x02, 0x03]);
    let roots: Vec<Root> = (0..4)
        .map(|i| compute_root(&node(0x01), &InclusionProof::new(siblings.clone(), i)).unwrap())
        .collect();
    for a in 0..roots.len() {
        for b in a + 1..roots.len() {
            assert_ne!(roots[a], roots[b]);
        }
    }
}

#[test]
fn test_truncated_carry_between_levels() {
    // Level 0 output is 32 bytes; only its leading 16 reach level 1
    let level0 = combine_nodes(&node(0x01), &node(0x02));
    let expected = combine_nodes(&level0.leading_node(), &node(0x03));

    let proof = InclusionProof::new(path(&[0x02, 0x03]), 0);
    assert_eq!(compute_root(&node(0x01), &proof).unwrap(), expected);

    // The final level keeps its full width
    assert!(!expected.as_bytes()[16..].iter().all(|b| *b == 0));
}

#[test]
fn test_four_leaf_tree_agrees_on_root() {
    let leaves = path(&[0x01, 0x02, 0x03, 0x04]);
    let p01 = combine_nodes(&leaves[0], &leaves[1]).leading_node();
    let p23 = combine_nodes(&leaves[2], &leaves[3]).leading_node();
    let root = combine_nodes(&p01, &p23);
    assert_eq!(
        root.to_hex(),
        "7bb38a43f6d29f3af742b0bafa1b3bc5de187d867405b2cb61db1637370ed304"
    );

    for (i, leaf) in leaves.iter().enumerate() {
        let uncle = if i < 2 { p23 } else { p01 };
        let proof = InclusionProof::new(vec![leaves[i ^ 1], uncle], i as u64);
        assert_eq!(verify_root(&proof, leaf).unwrap(), root);
    }
}

#[test]
fn test_combine_fixture_and_order() {
    assert_eq!(
        combine_nodes(&node(0x02), &node(0x01)).to_hex(),
        "2cf6b74e206ddbbc767acae14ca12be843dc582c4f508414129b9a36cbf7d72d"
    );
    assert_ne!(
        combine_nodes(&node(0x02), &node(0x01)),
        combine_nodes(&node(0x01), &node(0x02))
    );
}

#[test]
fn test_combine_output_is_254_bits() {
    for a in 0..16u8 {
        for b in 0..16u8 {
            let out = combine_nodes(&node(a), &node(b));
            assert_eq!(out.as_bytes()[31] & 0xc0, 0);
        }
    }
}
