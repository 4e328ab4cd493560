use std::io::Read;
use std::iter::Peekable;
use std::vec::IntoIter;

use crate::code_pair_buffer::CodePairBuffer;
use crate::entities::*;
use crate::error::DxfResult;

/// Reads entities from the pair stream until the enclosing `ENDSEC` or
/// `ENDBLK`, attaching `VERTEX`/`ATTRIB` runs to their containing
/// `POLYLINE`/`INSERT` up to the terminating `SEQEND`.
pub(crate) fn read_entities_into_vec<T>(
    iter: &mut CodePairBuffer<T>,
    result: &mut Vec<Entity>,
) -> DxfResult<()>
where
    T: Read,
{
    let mut flat = vec![];
    while let Some(entity) = Entity::read(iter)? {
        flat.push(entity);
    }

    let mut children = flat.into_iter().peekable();
    while let Some(mut entity) = children.next() {
        gather_child_entities(&mut entity, &mut children);
        result.push(entity);
    }

    Ok(())
}

fn gather_child_entities(entity: &mut Entity, iter: &mut Peekable<IntoIter<Entity>>) {
    match entity.specific {
        EntityType::Polyline(ref mut poly) => loop {
            match iter.peek().map(|e| &e.specific) {
                Some(EntityType::Vertex(_)) => {
                    let child = iter.next().unwrap();
                    let handle = child.common.handle;
                    if let EntityType::Vertex(vertex) = child.specific {
                        poly.__vertices_and_handles.push((vertex, handle));
                    }
                }
                Some(EntityType::Seqend(_)) => {
                    let child = iter.next().unwrap();
                    poly.__seqend_handle = child.common.handle;
                    break;
                }
                // a run with no SEQEND just ends
                _ => break,
            }
        },
        EntityType::Insert(ref mut ins) if ins.__has_attributes => loop {
            match iter.peek().map(|e| &e.specific) {
                Some(EntityType::Attribute(_)) => {
                    let child = iter.next().unwrap();
                    let handle = child.common.handle;
                    if let EntityType::Attribute(attribute) = child.specific {
                        ins.__attributes_and_handles.push((attribute, handle));
                    }
                }
                Some(EntityType::Seqend(_)) => {
                    let child = iter.next().unwrap();
                    ins.__seqend_handle = child.common.handle;
                    break;
                }
                _ => break,
            }
        },
        _ => (),
    }
}
