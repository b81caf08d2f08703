use crate::scene_graph::ObjectId;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("point list has {len} coordinates, expected interleaved (x, y) pairs")]
    OddCoordinateCount { len: usize },

    #[error("object {0:?} does not exist in this scene")]
    UnknownObject(ObjectId),

    #[error("cannot attach {child:?} to {parent:?}: parent is the child or one of its descendants")]
    CyclicParent { child: ObjectId, parent: ObjectId },
}

pub type Result<T> = std::result::Result<T, Error>;
