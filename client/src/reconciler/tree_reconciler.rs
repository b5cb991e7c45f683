use std::mem;

use log::warn;

use scenebridge_shared::NodeId;

use crate::{
    element::{Element, NodeElement},
    host_config::{HostConfig, UpdatePayload},
    reconciler::{
        diff_engine::DiffEngine,
        mounted::{Mounted, MountedNode, Parent},
    },
};

/// Minimal positional diff engine.
///
/// Children are matched by index. A slot is reused when the old and new
/// elements have the same kind and key (or are both text); otherwise the old
/// subtree is deleted and a new one is placed. There is no keyed move
/// detection and no scheduling: every call renders and commits at once.
///
/// The committed tree only advances when a commit succeeds, so a failed render
/// is diffed against the last good tree next time. Instances created by a
/// failed render are detached again before the error is returned.
#[derive(Debug, Default)]
pub struct TreeReconciler {
    container: Vec<Mounted>,
    mounted: bool,
}

impl TreeReconciler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ids of the top-level nodes attached to the container.
    pub fn container_children(&self) -> Vec<NodeId> {
        self.container.iter().map(Mounted::id).collect()
    }
}

impl DiffEngine for TreeReconciler {
    fn update_container<H: HostConfig>(&mut self, host: &mut H, tree: &Element) -> Result<(), H::Error> {
        let mut effects = Effects::default();
        let rendered = reconcile_children(
            host,
            Parent::Container,
            self.container.clone(),
            std::slice::from_ref(tree),
            &mut effects,
        );
        let created = mem::take(&mut effects.created);

        match rendered.and_then(|next| commit(host, effects, !self.mounted).map(|()| next)) {
            Ok(next) => {
                self.container = next;
                self.mounted = true;
                Ok(())
            }
            Err(err) => {
                discard(host, created);
                Err(err)
            }
        }
    }
}

// Errors here are dropped: the render already failed with the first one, and
// the local entry is gone whether or not the host heard about it.
fn discard<H: HostConfig>(host: &mut H, created: Vec<NodeId>) {
    if created.is_empty() {
        return;
    }
    warn!("Render failed, discarding {} new instances", created.len());
    for id in created.into_iter().rev() {
        let _ = host.detach_deleted_instance(id);
    }
}

struct Placement {
    parent: Parent,
    child: NodeId,
    before: Option<NodeId>,
}

enum Change {
    Props { id: NodeId, payload: UpdatePayload },
    Text { id: NodeId, old: String, new: String },
}

#[derive(Default)]
struct Effects {
    deletions: Vec<(Parent, Mounted)>,
    placements: Vec<Placement>,
    changes: Vec<Change>,
    created: Vec<NodeId>,
}

fn reconcile_children<H: HostConfig>(
    host: &mut H,
    parent: Parent,
    old: Vec<Mounted>,
    new: &[Element],
    effects: &mut Effects,
) -> Result<Vec<Mounted>, H::Error> {
    let mut old: Vec<Option<Mounted>> = old.into_iter().map(Some).collect();
    let mut next = Vec::with_capacity(new.len());
    let mut placed = Vec::with_capacity(new.len());

    for (index, element) in new.iter().enumerate() {
        let previous = old.get_mut(index).and_then(Option::take);
        match (previous, element) {
            (Some(Mounted::Text { id, text }), Element::Text(new_text)) => {
                if text != *new_text {
                    effects.changes.push(Change::Text {
                        id,
                        old: text,
                        new: new_text.clone(),
                    });
                }
                next.push(Mounted::Text {
                    id,
                    text: new_text.clone(),
                });
                placed.push(false);
            }
            (Some(Mounted::Node(node)), Element::Node(element))
                if node.kind == element.kind_name() && node.key.as_deref() == element.key_name() =>
            {
                next.push(reconcile_node(host, node, element, effects)?);
                placed.push(false);
            }
            (stale, element) => {
                if let Some(stale) = stale {
                    effects.deletions.push((parent, stale));
                }
                next.push(create_subtree(host, element, &mut effects.created)?);
                placed.push(true);
            }
        }
    }

    for stale in old.into_iter().flatten() {
        effects.deletions.push((parent, stale));
    }

    for (index, mounted) in next.iter().enumerate() {
        if !placed[index] {
            continue;
        }
        // anchor on the next sibling that stays where it is
        let before = next[index + 1..]
            .iter()
            .zip(&placed[index + 1..])
            .find(|(_, is_placed)| !**is_placed)
            .map(|(sibling, _)| sibling.id());
        effects.placements.push(Placement {
            parent,
            child: mounted.id(),
            before,
        });
    }

    Ok(next)
}

fn reconcile_node<H: HostConfig>(
    host: &mut H,
    node: MountedNode,
    element: &NodeElement,
    effects: &mut Effects,
) -> Result<Mounted, H::Error> {
    let props = element.prop_map();
    if let Some(payload) = host.prepare_update(node.id, &node.kind, &node.props, props) {
        effects.changes.push(Change::Props {
            id: node.id,
            payload,
        });
    }

    let text_content = host.should_set_text_content(element.kind_name(), props);
    let new_children: &[Element] = if text_content {
        &[]
    } else {
        element.child_elements()
    };
    let children = reconcile_children(host, Parent::Node(node.id), node.children, new_children, effects)?;

    Ok(Mounted::Node(MountedNode {
        id: node.id,
        kind: node.kind,
        key: node.key,
        props: props.clone(),
        children,
    }))
}

fn create_subtree<H: HostConfig>(
    host: &mut H,
    element: &Element,
    created: &mut Vec<NodeId>,
) -> Result<Mounted, H::Error> {
    let element = match element {
        Element::Text(text) => {
            let id = host.create_text_instance(text)?;
            created.push(id);
            return Ok(Mounted::Text {
                id,
                text: text.clone(),
            });
        }
        Element::Node(element) => element,
    };

    let kind = element.kind_name();
    let props = element.prop_map();
    let id = host.create_instance(kind, props)?;
    created.push(id);

    let text_content = host.should_set_text_content(kind, props);
    let mut children = Vec::new();
    if !text_content {
        for child in element.child_elements() {
            let mounted = create_subtree(host, child, created)?;
            host.append_initial_child(id, mounted.id())?;
            children.push(mounted);
        }
    }
    // commit-time mount callbacks are not supported, the answer is unused
    host.finalize_initial_children(id, kind, props);

    Ok(Mounted::Node(MountedNode {
        id,
        kind: kind.to_string(),
        key: element.key_name().map(str::to_string),
        props: props.clone(),
        children,
    }))
}

fn commit<H: HostConfig>(host: &mut H, effects: Effects, initial: bool) -> Result<(), H::Error> {
    host.prepare_for_commit();

    if initial {
        host.clear_container()?;
    }

    for (parent, subtree) in effects.deletions {
        match parent {
            Parent::Container => host.remove_child_from_container(subtree.id())?,
            Parent::Node(parent) => host.remove_child(parent, subtree.id())?,
        }
        let mut ids = Vec::new();
        subtree.collect_ids_post_order(&mut ids);
        for id in ids {
            host.detach_deleted_instance(id)?;
        }
    }

    for placement in effects.placements {
        match (placement.parent, placement.before) {
            (Parent::Container, None) => host.append_child_to_container(placement.child)?,
            (Parent::Container, Some(before)) => {
                host.insert_in_container_before(placement.child, before)?
            }
            (Parent::Node(parent), None) => host.append_child(parent, placement.child)?,
            (Parent::Node(parent), Some(before)) => {
                host.insert_before(parent, placement.child, before)?
            }
        }
    }

    for change in effects.changes {
        match change {
            Change::Props { id, payload } => host.commit_update(id, payload)?,
            Change::Text { id, old, new } => host.commit_text_update(id, &old, &new)?,
        }
    }

    host.reset_after_commit()
}
