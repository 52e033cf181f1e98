//! Benchmarks for forest operations
//!
//! Run with: cargo bench --bench tree_ops

use sourcefilter::model::{Forest, Level, SourceId, SourceNode};
use sourcefilter::tree;
use sourcefilter::view::outline_view;
use sourcefilter::{AppModel, SourceConfig};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

/// Build a full forest with `roots` roots, each with `fanout` children and
/// `fanout` grandchildren per child
fn make_forest(roots: usize, fanout: usize) -> Forest {
    let nodes = (0..roots)
        .map(|r| {
            let root = SourceNode::root(format!("r{}", r), format!("Root {}", r));
            let children = (0..fanout)
                .filter_map(|c| {
                    let child =
                        SourceNode::child_of(&root, format!("r{}-{}", r, c), format!("Child {}", c))?;
                    let leaves = (0..fanout)
                        .filter_map(|l| {
                            SourceNode::child_of(
                                &child,
                                format!("r{}-{}-{}", r, c, l),
                                format!("Leaf {}", l),
                            )
                        })
                        .collect();
                    Some(child.with_children(leaves))
                })
                .collect();
            root.with_children(children)
        })
        .collect();
    Forest::new(nodes)
}

// ============================================================================
// Mutator benchmarks
// ============================================================================

#[divan::bench(args = [5, 20, 50])]
fn add_child_last_root(bencher: divan::Bencher, fanout: usize) {
    let forest = make_forest(10, fanout);
    let parent = SourceId::new("r9-0");
    bencher.bench(|| {
        divan::black_box(tree::add(
            &forest,
            Some(&parent),
            Level::Three,
            SourceId::new("fresh"),
        ))
    });
}

#[divan::bench(args = [5, 20, 50])]
fn rename_deep_leaf(bencher: divan::Bencher, fanout: usize) {
    let forest = make_forest(10, fanout);
    let id = SourceId::new("r9-0-0");
    bencher.bench(|| divan::black_box(tree::rename(&forest, &id, "Renamed")));
}

#[divan::bench(args = [5, 20, 50])]
fn delete_root_subtree(bencher: divan::Bencher, fanout: usize) {
    let forest = make_forest(10, fanout);
    let id = SourceId::new("r0");
    bencher.bench(|| divan::black_box(tree::delete(&forest, &id)));
}

#[divan::bench(args = [5, 20, 50])]
fn find_missing_id(bencher: divan::Bencher, fanout: usize) {
    let forest = make_forest(10, fanout);
    let id = SourceId::new("missing");
    bencher.bench(|| divan::black_box(forest.find(&id)));
}

// ============================================================================
// View benchmarks
// ============================================================================

#[divan::bench(args = [5, 20])]
fn outline_rows_all_expanded(bencher: divan::Bencher, fanout: usize) {
    let forest = make_forest(10, fanout);
    let mut model = AppModel::new(SourceConfig {
        max_sources: 50,
        sources: forest,
    });
    for id in model.forest().ids() {
        model.outline.expand(&id);
    }
    bencher.bench(|| divan::black_box(outline_view(&model, 20)));
}
