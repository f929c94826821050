// src/core/commands/json/mod.rs
//! Request builders for the `JSON.*` command family, one module per command.

// Internal helpers for argument encoding.
mod helpers;

pub mod json_arrappend;
pub mod json_arrindex;
pub mod json_arrinsert;
pub mod json_arrlen;
pub mod json_arrpop;
pub mod json_arrtrim;
pub mod json_clear;
pub mod json_debug;
pub mod json_del;
pub mod json_forget;
pub mod json_get;
pub mod json_mget;
pub mod json_numincrby;
pub mod json_nummultby;
pub mod json_objkeys;
pub mod json_objlen;
pub mod json_resp;
pub mod json_set;
pub mod json_strappend;
pub mod json_strlen;
pub mod json_toggle;
pub mod json_type;

pub use self::json_arrappend::JsonArrAppend;
pub use self::json_arrindex::{ArrIndexRange, JsonArrIndex};
pub use self::json_arrinsert::JsonArrInsert;
pub use self::json_arrlen::JsonArrLen;
pub use self::json_arrpop::{JsonArrPop, POP_ARR_LAST};
pub use self::json_arrtrim::JsonArrTrim;
pub use self::json_clear::JsonClear;
pub use self::json_debug::{DebugSubcommand, JsonDebug};
pub use self::json_del::JsonDel;
pub use self::json_forget::JsonForget;
pub use self::json_get::{GetOptions, JsonGet};
pub use self::json_mget::JsonMGet;
pub use self::json_numincrby::JsonNumIncrBy;
pub use self::json_nummultby::JsonNumMultBy;
pub use self::json_objkeys::JsonObjKeys;
pub use self::json_objlen::JsonObjLen;
pub use self::json_resp::JsonResp;
pub use self::json_set::{JsonSet, SetCondition};
pub use self::json_strappend::JsonStrAppend;
pub use self::json_strlen::JsonStrLen;
pub use self::json_toggle::JsonToggle;
pub use self::json_type::JsonType;
