// src/scene/parser.rs
//! Parser for Unity's tagged-block YAML scene format.
//!
//! A scene file is a sequence of blocks, each introduced by a header of the
//! form `--- !u!<classId> &<fileId>` and holding a single-key YAML mapping.
//! Blocks reference each other through `{fileID: N}`; references are resolved
//! through lookup tables after every block is read, so forward references
//! are fine.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;
use serde_yaml::{Mapping, Value};
use tracing::debug;

use super::component::{file_ref, scalar_string};
use super::{ComponentKind, ComponentNode, FileId, GameObjectNode, RectTransformData, SceneDocument};
use crate::error::{Result, SceneAuditError};

#[cfg(test)]
#[path = "parser_test.rs"]
mod tests;

const CLASS_GAME_OBJECT: u32 = 1;

static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^--- !u!(\d+) &(-?\d+)(?: (stripped))?\s*$").unwrap_or_else(|_| panic!("Invalid Regex"))
});

/// Header plus the raw body lines of one block.
struct BlockText<'a> {
    class_id: u32,
    file_id: FileId,
    body: Vec<&'a str>,
}

/// A block after YAML parsing.
struct RawBlock {
    class_id: u32,
    file_id: FileId,
    fields: Value,
}

impl RawBlock {
    fn owner(&self) -> Option<FileId> {
        self.fields.get("m_GameObject").and_then(file_ref)
    }

    fn is_transform(&self) -> bool {
        matches!(self.class_id, 4 | 224)
    }
}

/// Parses scene text into a [`SceneDocument`].
///
/// # Errors
/// Returns [`SceneAuditError::Parse`] when the text does not follow the
/// block grammar and [`SceneAuditError::EmptyScene`] when it holds no
/// game objects.
pub fn parse_scene(path: &str, raw: &str) -> Result<SceneDocument> {
    if raw.trim().is_empty() {
        return Err(SceneAuditError::parse(path, None, "empty input"));
    }

    let (has_directive, texts) = split_blocks(path, raw)?;
    if texts.is_empty() && !has_directive {
        return Err(SceneAuditError::parse(path, None, "no tagged blocks found"));
    }

    let blocks = texts
        .into_iter()
        .map(|t| parse_block(path, t))
        .collect::<Result<Vec<_>>>()?;

    let doc = build_document(path, &blocks)?;
    if doc.objects().is_empty() {
        return Err(SceneAuditError::EmptyScene { path: path.to_string() });
    }
    debug!(scene = path, objects = doc.objects().len(), blocks = blocks.len(), "parsed scene");
    Ok(doc)
}

fn split_blocks<'a>(path: &str, raw: &'a str) -> Result<(bool, Vec<BlockText<'a>>)> {
    let mut has_directive = false;
    let mut blocks: Vec<BlockText<'a>> = Vec::new();

    for (row, line) in raw.lines().enumerate() {
        if let Some(caps) = HEADER_RE.captures(line) {
            let class_id = caps[1]
                .parse::<u32>()
                .map_err(|e| SceneAuditError::parse(path, None, format!("line {}: {e}", row + 1)))?;
            let file_id = caps[2]
                .parse::<FileId>()
                .map_err(|e| SceneAuditError::parse(path, None, format!("line {}: {e}", row + 1)))?;
            blocks.push(BlockText { class_id, file_id, body: Vec::new() });
            continue;
        }

        if line.starts_with("---") {
            return Err(SceneAuditError::parse(
                path,
                None,
                format!("line {}: malformed block header `{line}`", row + 1),
            ));
        }

        match blocks.last_mut() {
            Some(block) => block.body.push(line),
            None => {
                let trimmed = line.trim();
                if trimmed.starts_with("%YAML") {
                    has_directive = true;
                } else if !(trimmed.is_empty() || trimmed.starts_with('%') || trimmed.starts_with('#')) {
                    return Err(SceneAuditError::parse(
                        path,
                        None,
                        format!("line {}: content before the first block header", row + 1),
                    ));
                }
            }
        }
    }

    Ok((has_directive, blocks))
}

fn parse_block(path: &str, text: BlockText<'_>) -> Result<RawBlock> {
    let id = Some(text.file_id);
    let body = text.body.join("\n");
    if body.trim().is_empty() {
        return Err(SceneAuditError::parse(path, id, "block has no body"));
    }

    let value: Value =
        serde_yaml::from_str(&body).map_err(|e| SceneAuditError::parse(path, id, e.to_string()))?;
    let Value::Mapping(map) = value else {
        return Err(SceneAuditError::parse(path, id, "block body is not a mapping"));
    };
    if map.len() != 1 {
        return Err(SceneAuditError::parse(path, id, "block must hold exactly one type key"));
    }

    let Some((_, inner)) = map.into_iter().next() else {
        return Err(SceneAuditError::parse(path, id, "block must hold exactly one type key"));
    };
    let fields = match inner {
        Value::Mapping(m) => Value::Mapping(m),
        Value::Null => Value::Mapping(Mapping::new()),
        _ => return Err(SceneAuditError::parse(path, id, "block type key must map to fields")),
    };

    Ok(RawBlock {
        class_id: text.class_id,
        file_id: text.file_id,
        fields,
    })
}

fn build_document(path: &str, blocks: &[RawBlock]) -> Result<SceneDocument> {
    let mut by_id: HashMap<FileId, &RawBlock> = HashMap::new();
    for block in blocks {
        if by_id.insert(block.file_id, block).is_some() {
            return Err(SceneAuditError::parse(path, Some(block.file_id), "duplicate block id"));
        }
    }

    let mut objects: Vec<GameObjectNode> = blocks
        .iter()
        .filter(|b| b.class_id == CLASS_GAME_OBJECT)
        .map(new_game_object)
        .collect();
    let slot: HashMap<FileId, usize> = objects.iter().enumerate().map(|(i, o)| (o.id, i)).collect();

    let mut claimed: HashSet<FileId> = HashSet::new();
    let mut transforms: HashMap<FileId, &RawBlock> = HashMap::new();

    // Listed components first, in `m_Component` order.
    for block in blocks.iter().filter(|b| b.class_id == CLASS_GAME_OBJECT) {
        let Some(&i) = slot.get(&block.file_id) else { continue };
        for comp_id in listed_components(&block.fields) {
            let Some(&comp) = by_id.get(&comp_id) else {
                debug!(scene = path, component = comp_id, "dangling component reference");
                continue;
            };
            if comp.class_id == CLASS_GAME_OBJECT || comp.owner().is_some_and(|o| o != block.file_id) {
                continue;
            }
            if claimed.insert(comp.file_id) {
                attach(path, &mut objects[i], comp, &mut transforms);
            }
        }
    }

    // Components that name their owner but are missing from its list.
    for comp in blocks.iter().filter(|b| b.class_id != CLASS_GAME_OBJECT) {
        if claimed.contains(&comp.file_id) {
            continue;
        }
        let Some(&i) = comp.owner().and_then(|o| slot.get(&o)) else {
            continue;
        };
        claimed.insert(comp.file_id);
        attach(path, &mut objects[i], comp, &mut transforms);
    }

    link_hierarchy(&mut objects, &transforms, &by_id);
    Ok(SceneDocument::new(path.to_string(), objects))
}

fn new_game_object(block: &RawBlock) -> GameObjectNode {
    GameObjectNode {
        id: block.file_id,
        name: block.fields.get("m_Name").and_then(scalar_string).unwrap_or_default(),
        active: block
            .fields
            .get("m_IsActive")
            .and_then(Value::as_i64)
            .map_or(true, |v| v != 0),
        components: Vec::new(),
        transform: None,
        parent: None,
        children: Vec::new(),
    }
}

/// Component ids from `m_Component`, accepting both the current
/// `- component: {fileID: N}` form and the legacy `- <classId>: {fileID: N}`.
fn listed_components(fields: &Value) -> Vec<FileId> {
    let Some(items) = fields.get("m_Component").and_then(Value::as_sequence) else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(|item| item.as_mapping()?.values().find_map(file_ref))
        .collect()
}

fn attach<'a>(
    path: &str,
    obj: &mut GameObjectNode,
    block: &'a RawBlock,
    transforms: &mut HashMap<FileId, &'a RawBlock>,
) {
    let node = ComponentNode::new(block.file_id, block.class_id, block.fields.clone());
    let kind = node.kind();
    if kind.is_unique() && obj.has(kind) {
        debug!(scene = path, object = %obj.name, kind = kind.label(), "duplicate component dropped");
        return;
    }
    if block.is_transform() {
        transforms.insert(obj.id, block);
        if kind == ComponentKind::RectTransform {
            obj.transform = Some(rect_data(&node));
        }
    }
    obj.components.push(node);
}

fn rect_data(node: &ComponentNode) -> RectTransformData {
    RectTransformData {
        anchored_position: node.vec2_field("m_AnchoredPosition").unwrap_or_default(),
        size_delta: node.vec2_field("m_SizeDelta").unwrap_or_default(),
        anchor_min: node.vec2_field("m_AnchorMin").unwrap_or_default(),
        anchor_max: node.vec2_field("m_AnchorMax").unwrap_or_default(),
        pivot: node.vec2_field("m_Pivot").unwrap_or_default(),
    }
}

fn link_hierarchy(
    objects: &mut [GameObjectNode],
    transforms: &HashMap<FileId, &RawBlock>,
    by_id: &HashMap<FileId, &RawBlock>,
) {
    let owner_of = |transform_id: FileId| -> Option<FileId> {
        let block = by_id.get(&transform_id)?;
        if !block.is_transform() {
            return None;
        }
        block.owner()
    };

    for obj in objects.iter_mut() {
        let Some(transform) = transforms.get(&obj.id) else { continue };
        obj.parent = transform
            .fields
            .get("m_Father")
            .and_then(file_ref)
            .and_then(&owner_of)
            .filter(|p| *p != obj.id);
        obj.children = transform
            .fields
            .get("m_Children")
            .and_then(Value::as_sequence)
            .map(|items| {
                items
                    .iter()
                    .filter_map(file_ref)
                    .filter_map(&owner_of)
                    .filter(|c| *c != obj.id)
                    .collect()
            })
            .unwrap_or_default();
    }

    // A child that names its father but is missing from the father's list.
    let slot: HashMap<FileId, usize> = objects.iter().enumerate().map(|(i, o)| (o.id, i)).collect();
    for i in 0..objects.len() {
        let (id, parent) = (objects[i].id, objects[i].parent);
        let Some(&p) = parent.and_then(|p| slot.get(&p)) else { continue };
        if !objects[p].children.contains(&id) {
            objects[p].children.push(id);
        }
    }
}
