use crate::commands::View;
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S) -> Result<View> {
    let entries = store.list_entries()?;
    Ok(View::Index { entries })
}
