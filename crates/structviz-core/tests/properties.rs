//! Property-based tests for the color model, array offsets and list traversal.

use std::collections::HashSet;

use proptest::prelude::*;
use structviz_core::{
    Array, ArrayConfig, Color, Element, LinkedList, ListKind, VizError, build_representation,
};

fn valid_rgba() -> impl Strategy<Value = (i64, i64, i64, f64)> {
    (0i64..=255, 0i64..=255, 0i64..=255, 0.0f64..=1.0)
}

fn bad_channel() -> impl Strategy<Value = i64> {
    prop_oneof![i64::MIN..0i64, 256i64..i64::MAX]
}

fn bad_alpha() -> impl Strategy<Value = f64> {
    prop_oneof![
        -1.0e9f64..-1.0e-9,
        1.000_000_1f64..1.0e9,
        Just(f64::NAN),
        Just(f64::INFINITY),
        Just(f64::NEG_INFINITY),
    ]
}

/// A tuple with at least one channel outside its legal interval.
fn invalid_rgba() -> impl Strategy<Value = (i64, i64, i64, f64)> {
    (valid_rgba(), 0usize..4, bad_channel(), bad_alpha(), any::<bool>()).prop_map(
        |((mut r, mut g, mut b, mut a), which, bad, bad_a, both)| {
            match which {
                0 => r = bad,
                1 => g = bad,
                2 => b = bad,
                _ => a = bad_a,
            }
            if both {
                a = bad_a;
            }
            (r, g, b, a)
        },
    )
}

/// Extents for 2D and 3D arrays, square or not.
fn multi_dim_extents() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(1i64..9, 2..=3)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn valid_color_set_roundtrips((r, g, b, a) in valid_rgba()) {
        let mut c = Color::default();
        c.set(r, g, b, a).unwrap();
        prop_assert_eq!(c.rgba(), (r as u8, g as u8, b as u8, a));
    }

    #[test]
    fn invalid_color_set_keeps_previous(prev in valid_rgba(), (r, g, b, a) in invalid_rgba()) {
        let mut c = Color::new(prev.0, prev.1, prev.2, prev.3).unwrap();
        let before = c.rgba();
        let err = c.set(r, g, b, a).unwrap_err();
        prop_assert!(matches!(err, VizError::Range { .. }), "expected VizError::Range");
        prop_assert_eq!(c.rgba(), before);
    }

    #[test]
    fn offsets_are_unique_and_bounded(extents in multi_dim_extents()) {
        let arr: Array = Array::new(&ArrayConfig::new(extents.clone())).unwrap();
        let size: usize = extents.iter().map(|&e| e as usize).product();
        prop_assert_eq!(arr.len(), size);
        let ex = extents[0] as usize;
        let ey = extents[1] as usize;
        let ez = extents.get(2).map(|&e| e as usize).unwrap_or(1);
        let mut seen = HashSet::new();
        for z in 0..ez {
            for y in 0..ey {
                for x in 0..ex {
                    let coords: Vec<usize> = if extents.len() == 3 { vec![x, y, z] } else { vec![x, y] };
                    let off = arr.offset_of(&coords).unwrap();
                    prop_assert!(off < size);
                    prop_assert_eq!(arr.offset_of(&coords).unwrap(), off);
                    prop_assert_eq!(off, x + y * ex + z * ex * ey);
                    prop_assert_eq!(arr.coords_of(off).unwrap(), coords);
                    prop_assert!(seen.insert(off));
                }
            }
        }
        prop_assert_eq!(seen.len(), size);
    }

    #[test]
    fn out_of_extent_coordinates_fail(extents in multi_dim_extents(), axis in 0usize..3) {
        let arr: Array = Array::new(&ArrayConfig::new(extents.clone())).unwrap();
        let axis = axis % extents.len();
        let mut coords = vec![0usize; extents.len()];
        coords[axis] = extents[axis] as usize;
        let err = arr.get(&coords).unwrap_err();
        prop_assert!(
            matches!(err, VizError::IndexOutOfRange { axis: a, .. } if a == axis),
            "unexpected {:?}",
            err
        );
    }

    #[test]
    fn circular_doubly_list_emits_each_node_once(n in 2usize..48) {
        let list: LinkedList<usize> = LinkedList::from_elements(
            ListKind::CircularDoubly,
            (0..n).map(|i| Element::new(i).with_label(i.to_string())),
        );
        let doc = build_representation(&list).unwrap();
        prop_assert_eq!(doc.nodes.len(), n);
        prop_assert_eq!(doc.links_with_role("next").count(), n);
        prop_assert_eq!(doc.links_with_role("prev").count(), n);
        let names: HashSet<&str> = doc.nodes.iter().map(|n| n.name.as_str()).collect();
        prop_assert_eq!(names.len(), n);
    }

    #[test]
    fn circular_singly_list_emits_each_node_once(n in 2usize..48) {
        let list: LinkedList = LinkedList::from_elements(
            ListKind::CircularSingly,
            (0..n).map(|_| Element::default()),
        );
        let doc = build_representation(&list).unwrap();
        prop_assert_eq!(doc.nodes.len(), n);
        prop_assert_eq!(doc.links_with_role("next").count(), n);
        prop_assert_eq!(doc.links_with_role("prev").count(), 0);
        let again = build_representation(&list).unwrap();
        prop_assert_eq!(doc, again);
    }
}
