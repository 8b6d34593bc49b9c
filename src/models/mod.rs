mod rid;

pub use rid::{Rid, SignedRid, Tier, RID16_LEN, RID20_LEN, SIGNED_RID20_LEN};
