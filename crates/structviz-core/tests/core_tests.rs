use std::collections::HashSet;

use structviz_core::{
    Array, ArrayConfig, BinarySearchTree, BinaryTree, Color, Element, FileTransport, LinkVisual,
    LinkedList, ListKind, RenderOpts, Shape, StructureType, VizError, build_representation,
};

#[test]
fn circular_singly_list_dump() {
    let list: LinkedList<u32> = LinkedList::from_elements(
        ListKind::CircularSingly,
        (0..6).map(|i| Element::new(i).with_label(format!("node {}", i))),
    );
    let doc = build_representation(&list).expect("build");
    assert_eq!(doc.nodes.len(), 6);
    assert_eq!(doc.links.len(), 6);
    // last node closes the cycle
    let last = doc.links.last().unwrap();
    assert_eq!((last.source.as_str(), last.target.as_str()), ("5", "0"));
    let js = doc.to_json_string(RenderOpts::default()).unwrap();
    assert!(js.starts_with("{\"nodes\":["));
    assert!(js.contains("\"label\":\"node 3\""));
    assert!(!js.contains("\"dims\""));
}

#[test]
fn styled_tree_document() {
    let mut tree: BinaryTree<&str> = BinaryTree::new();
    let root = tree.insert_node(Element::new("root").with_label("R"));
    let child = tree.insert_node(Element::new("child").with_label("C"));
    tree.set_left(root, child).unwrap();

    let el = tree.element_mut(root).unwrap();
    el.set_identity("root").unwrap();
    let v = el.visual_mut();
    v.set_color("#ff0000".parse().unwrap());
    v.set_shape_str("diamond").unwrap();
    v.set_size(25.0).unwrap();
    v.set_opacity(0.5).unwrap();
    let lv = el.link_visual_mut("left").unwrap();
    lv.set_color(Color::new(0, 0, 255, 1.0).unwrap());
    lv.set_thickness(4.0).unwrap();

    let doc = build_representation(&tree).unwrap();
    let v = doc.to_value().unwrap();
    assert_eq!(
        v["nodes"][0],
        serde_json::json!({
            "name": "root", "label": "R", "color": [255, 0, 0, 1.0],
            "shape": "diamond", "size": 25.0, "opacity": 0.5
        })
    );
    assert_eq!(
        v["links"][0],
        serde_json::json!({
            "source": "root", "target": "1", "color": [0, 0, 255, 1.0],
            "thickness": 4.0, "opacity": 1.0
        })
    );
}

#[test]
fn array_2d_grid_order() {
    let mut arr: Array<(usize, usize)> = Array::from_fn(&ArrayConfig::new([4, 3]), |c| {
        Element::new((c[0], c[1])).with_label(format!("({},{})", c[0], c[1]))
    })
    .unwrap();
    let mut seen = HashSet::new();
    for y in 0..3 {
        for x in 0..4 {
            assert_eq!(*arr.get(&[x, y]).unwrap().payload(), (x, y));
            assert!(seen.insert(arr.offset_of(&[x, y]).unwrap()));
        }
    }
    arr.get_mut(&[3, 2])
        .unwrap()
        .visual_mut()
        .set_shape(Shape::Square);
    assert!(matches!(
        arr.get(&[4, 0]),
        Err(VizError::IndexOutOfRange { axis: 0, .. })
    ));

    let doc = build_representation(&arr).unwrap();
    assert_eq!(doc.nodes.len(), 12);
    assert_eq!(doc.nodes[4].label, "(0,1)");
    assert_eq!(doc.nodes[11].shape, Shape::Square);
    assert_eq!(doc.dims, Some(vec![4, 3]));
}

#[test]
fn bst_document_has_every_node_once() {
    let mut bst: BinarySearchTree<i64, String> = BinarySearchTree::new();
    for k in [8, 3, 10, 1, 6, 14, 4, 7, 13] {
        bst.insert(k, Element::new(format!("v{}", k)).with_label(k.to_string()))
            .unwrap();
    }
    let doc = build_representation(&bst).unwrap();
    assert_eq!(doc.nodes.len(), 9);
    assert_eq!(doc.links.len(), 8);
    assert_eq!(doc.structure, Some(StructureType::BinarySearchTree));
    let found = bst.search(&6).unwrap();
    assert_eq!(bst.element(found).unwrap().payload(), "v6");
}

#[test]
fn rebuilding_unmodified_structure_matches() {
    let mut list: LinkedList = LinkedList::new(ListKind::Doubly);
    for _ in 0..4 {
        list.push_back(Element::default());
    }
    let head = list.head().unwrap();
    let mut thick = LinkVisual::default();
    thick.set_thickness(3.0).unwrap();
    list.set_link_visual(head, "next", thick).unwrap();
    let a = build_representation(&list).unwrap();
    let b = build_representation(&list).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.links[0].thickness, 3.0);
}

#[test]
fn file_transport_writes_document() {
    let dir = tempfile::tempdir().unwrap();
    let list: LinkedList = LinkedList::from_elements(
        ListKind::CircularDoubly,
        vec![Element::default(); 3],
    );
    let transport = FileTransport::new(dir.path());
    let doc = structviz_core::visualize(&list, &transport).unwrap();
    let files: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .flatten()
        .map(|e| e.path())
        .collect();
    assert_eq!(files.len(), 1);
    let name = files[0].file_name().unwrap().to_string_lossy().to_string();
    assert!(name.starts_with("CircularDoublyLinkedList_"));
    assert!(name.ends_with(".json"));
    let written: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&files[0]).unwrap()).unwrap();
    assert_eq!(written, doc.to_value().unwrap());

    let second = transport.deliver(&doc, StructureType::CircularDoublyLinkedList).unwrap();
    assert_ne!(second, files[0]);
}

#[test]
fn empty_structures() {
    let bst: BinarySearchTree<u8> = BinarySearchTree::new();
    let doc = build_representation(&bst).unwrap();
    assert_eq!(
        doc.to_json_string(RenderOpts::default()).unwrap(),
        r#"{"nodes":[],"links":[]}"#
    );
}
