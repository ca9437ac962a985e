//! Lockstep pairing of two single-pass sequences.

use itertools::{EitherOrBoth, Itertools};

use crate::descriptor::TypeKey;
use crate::error::{CollectionSide, MapperError, Result};

/// Walk `sources` and `destinations` together, calling `f` on each pair
///
/// Both sequences are advanced once per step and never measured up front, so
/// one-shot iterators work. The first step where only one side yields an
/// element fails with [`MapperError::CollectionSizeMismatch`]; pairs handled
/// before that point keep whatever `f` did to them. Returns the number of
/// pairs processed.
pub fn for_each_pair<I, J, F>(
    sources: I,
    destinations: J,
    destination_type: TypeKey,
    mut f: F,
) -> Result<usize>
where
    I: IntoIterator,
    J: IntoIterator,
    F: FnMut(I::Item, J::Item) -> Result<()>,
{
    let mut processed = 0;
    for pair in sources.into_iter().zip_longest(destinations) {
        let longer = match pair {
            EitherOrBoth::Both(source, destination) => {
                f(source, destination)?;
                processed += 1;
                continue;
            }
            EitherOrBoth::Left(_) => CollectionSide::Source,
            EitherOrBoth::Right(_) => CollectionSide::Destination,
        };
        return Err(MapperError::CollectionSizeMismatch {
            destination: destination_type,
            position: processed,
            longer,
        });
    }
    Ok(processed)
}
