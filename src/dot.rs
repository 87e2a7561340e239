use std::fmt::{Display, Write};

use crate::{
    arena::{Arena, NodeId},
    AvlTree,
};

/// A [graphviz] rendering of an [`AvlTree`], returned by [`AvlTree::dot()`].
///
/// Each node is labelled with its value and height. Absent children are drawn
/// as invisible points to keep left and right children on their own side.
///
/// [graphviz]: https://graphviz.org/
#[derive(Debug)]
pub struct Dot<'a, K> {
    tree: &'a AvlTree<K>,
}

impl<K> AvlTree<K> {
    /// Render the tree structure in the graphviz `dot` format.
    pub fn dot(&self) -> Dot<'_, K> {
        Dot { tree: self }
    }
}

impl<K> Display for Dot<'_, K>
where
    K: Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "digraph {{")?;
        writeln!(f, r#"bgcolor = "transparent";"#)?;
        writeln!(
            f,
            r#"node [shape = record; style = filled; fontcolor = orange4; fillcolor = white;];"#
        )?;
        if let Some(root) = self.tree.root {
            recurse(&self.tree.arena, root, f)?;
        }
        writeln!(f, "}}")
    }
}

fn recurse<K, W>(arena: &Arena<K>, id: NodeId, buf: &mut W) -> std::fmt::Result
where
    W: Write,
    K: Display,
{
    let n = &arena[id];

    writeln!(
        buf,
        r#""{}" [label="{} | h={}"];"#,
        n.value, n.value, n.height,
    )?;

    for v in [n.left, n.right] {
        match v {
            Some(v) => {
                writeln!(
                    buf,
                    "\"{}\" -> \"{}\" [color = \"orange1\";];",
                    n.value, arena[v].value
                )?;
                recurse(arena, v, buf)?;
            }
            None => {
                writeln!(buf, "\"null_{}\" [shape=point,style=invis];", n.value)?;
                writeln!(buf, "\"{}\" -> \"null_{}\" [style=invis];", n.value, n.value)?;
            }
        };
    }

    Ok(())
}
