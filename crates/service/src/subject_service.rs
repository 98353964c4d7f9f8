use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use serde::Serialize;
use uuid::Uuid;

use models::subject;
use crate::errors::ServiceError;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubjectNode {
    pub id: Uuid,
    pub title: String,
    pub children: Vec<SubjectNode>,
}

/// Level-one subjects with their level-two children.
pub async fn list_subject_tree(db: &DatabaseConnection) -> Result<Vec<SubjectNode>, ServiceError> {
    let all = subject::Entity::find()
        .order_by_asc(subject::Column::Sort)
        .all(db)
        .await?;
    Ok(build_subject_tree(all))
}

/// Group subjects by parent, keeping input order within each level.
/// Level-two rows whose parent is absent are dropped.
pub fn build_subject_tree(subjects: Vec<subject::Model>) -> Vec<SubjectNode> {
    let (roots, leaves): (Vec<_>, Vec<_>) = subjects.into_iter().partition(|s| s.is_top_level());
    let mut tree: Vec<SubjectNode> = roots
        .into_iter()
        .map(|s| SubjectNode { id: s.id, title: s.title, children: Vec::new() })
        .collect();
    for leaf in leaves {
        let parent = leaf.parent_id;
        if let Some(node) = tree.iter_mut().find(|n| Some(n.id) == parent) {
            node.children.push(SubjectNode { id: leaf.id, title: leaf.title, children: Vec::new() });
        }
    }
    tree
}
