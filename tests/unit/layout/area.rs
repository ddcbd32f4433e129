use super::*;

fn area(id: ExprId, rect: Rect, children: Vec<Area>) -> Area {
    Area {
        id,
        rect,
        inline: true,
        text: None,
        children,
    }
}

#[test]
fn flatten_accumulates_parent_origins() {
    let (root, mid, leaf) = (ExprId::fresh(), ExprId::fresh(), ExprId::fresh());
    let tree = area(
        root,
        Rect::new(0.0, 0.0, 100.0, 50.0),
        vec![area(
            mid,
            Rect::new(10.0, 20.0, 60.0, 40.0),
            vec![area(leaf, Rect::new(5.0, 0.0, 15.0, 20.0), vec![])],
        )],
    );
    assert_eq!(tree.count(), 3);

    let map = AreaMap::flatten(&tree, Vec2::new(2.0, 3.0));
    assert_eq!(map.len(), 3);
    assert_eq!(map.rect(root), Some(Rect::new(2.0, 3.0, 102.0, 53.0)));
    assert_eq!(map.rect(mid), Some(Rect::new(12.0, 23.0, 62.0, 43.0)));
    assert_eq!(map.rect(leaf), Some(Rect::new(17.0, 23.0, 27.0, 43.0)));
    assert_eq!(map.get(leaf).map(|a| a.depth), Some(2));
    let order: Vec<ExprId> = map.iter().map(|a| a.id).collect();
    assert_eq!(order, vec![root, mid, leaf]);
}

#[test]
fn hit_test_picks_the_deepest_area() {
    let (root, a, b) = (ExprId::fresh(), ExprId::fresh(), ExprId::fresh());
    let tree = area(
        root,
        Rect::new(0.0, 0.0, 100.0, 100.0),
        vec![
            area(a, Rect::new(0.0, 0.0, 50.0, 50.0), vec![]),
            area(b, Rect::new(50.0, 0.0, 100.0, 50.0), vec![]),
        ],
    );
    let map = AreaMap::flatten(&tree, Vec2::ZERO);
    assert_eq!(map.hit_test(Point::new(10.0, 10.0)), Some(a));
    assert_eq!(map.hit_test(Point::new(60.0, 10.0)), Some(b));
    assert_eq!(map.hit_test(Point::new(60.0, 90.0)), Some(root));
    assert_eq!(map.hit_test(Point::new(500.0, 5.0)), None);
    assert!(map.get(ExprId::fresh()).is_none());
}
