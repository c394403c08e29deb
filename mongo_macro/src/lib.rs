extern crate proc_macro;

mod mongo_index_macro;

use proc_macro::TokenStream;

/// 为实体生成 `MongoIndexModelProvider` 实现
///
/// ```ignore
/// #[derive(MongoIndexModelProvider)]
/// #[mongo_index(fields["receiver", "created_at:desc"], name("idx_receiver"))]
/// #[mongo_index(fields["sender", "receiver"], unique)]
/// struct Friendship { .. }
/// ```
///
/// 字段名后缀 `:desc` 表示降序，`order("desc")` 设置整条索引的默认方向。
#[proc_macro_derive(MongoIndexModelProvider, attributes(mongo_index))]
pub fn mongo_index_model_provider(input: TokenStream) -> TokenStream {
    mongo_index_macro::expand_index_model_provider(input)
}
