use scratch_collections::collections::binary_tree::BinarySearchTree;
use scratch_collections::collections::contiguous::ArrayList;
use scratch_collections::collections::error::CollectionError;
use scratch_collections::collections::linked::LinkedList;
use scratch_collections::collections::stack::Stack;
use scratch_collections::collections::traits::List;

/// Fills any [`List`] the same way, failing part way through on an out of bounds index.
fn fill(list: &mut dyn List<&'static str>) -> Result<(), CollectionError> {
    list.add("b");
    list.try_insert(0, "a")?;
    list.add("d");
    list.try_insert(2, "c")?;
    log::info!("filled list: first = {}, last = {}", list.try_first()?, list.try_last()?);

    list.try_insert(10, "z")?;
    Ok(())
}

fn main() -> Result<(), CollectionError> {
    env_logger::init();

    let mut stack = Stack::try_of(Some([Some(1), Some(2), Some(3)]))?;
    stack.push(4);
    log::info!("stack: {stack:?}");
    while let Ok(top) = stack.try_pop() {
        log::info!("popped {top}");
    }
    if let Err(err) = Stack::<u8>::try_of(Some([Some(1), None])) {
        log::info!("rejected stack: {err}");
    }

    let mut array = ArrayList::new();
    for i in 0..12 {
        array.add(i * i);
    }
    log::info!("array: {array} (len = {}, cap = {})", array.len(), array.cap());
    let removed = array.try_remove(3)?;
    log::info!("removed {removed}, now {array:?}");

    let mut linked = LinkedList::of(["x", "y"]);
    linked.clear();
    if let Err(err) = fill(&mut linked) {
        log::info!("linked list stopped at {}: {err}", linked);
    }

    let mut listed = ArrayList::with_cap(2);
    if let Err(err) = fill(&mut listed) {
        log::info!("array list stopped at {}: {err}", listed);
    }

    let mut tree = BinarySearchTree::of([50, 30, 70, 20, 40, 60, 80]);
    log::info!("inserted 40 again: {}", tree.insert(40));
    log::info!("tree depth {}, contains 60: {}", tree.depth(), tree.try_contains(Some(&60))?);
    let mut ordered = ArrayList::with_cap(tree.len());
    tree.in_order_traversal(|value| ordered.add(*value));
    log::info!("in order: {ordered}");
    log::info!("{tree:?}");

    Ok(())
}
