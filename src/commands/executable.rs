use crate::reply::Reply;
use crate::store::RecordStore;
use crate::Error;

pub trait Executable {
    fn exec(self, store: &mut RecordStore) -> Result<Reply, Error>;
}
