//! Static session-to-room assignments.
//!
//! Entry order is load-bearing: resolution is first-prefix-match, so a
//! session listed earlier shadows any later entry sharing its prefix. Keep
//! morning sessions first, afternoon sessions after, as printed in the
//! conference program.

use rollcall_model::MatchTable;

/// Build the room table for the current conference program.
pub fn room_table() -> MatchTable {
    MatchTable::from_prefix_entries([
        // Saturday morning
        ("跳脫傳統——AI時代的事奉", "C1"),
        ("先知性預言與禱告訓練", "F1"),
        ("吃喝玩樂中提升教會士氣", "G11"),
        ("恢復事奉中的喜樂與滿足", "G10"),
        ("培育下一代的領袖同工", "F2"),
        // Saturday afternoon
        ("學生事工", "E5"),
        ("弟兄事工", "G5"),
        ("姐妹事工", "G6"),
        ("家庭事奉", "Y2"),
        ("敬拜讚美", "G11"),
        ("小組教會", "F2"),
        ("靈力事奉", "G10"),
        ("職場宣教", "K4"),
    ])
}
