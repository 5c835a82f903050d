//! The fixed notification template and its renderer.
//!
//! One template, fixed at build time. Rendering is a pure function of the
//! participant and the room table; calling it twice yields byte-identical
//! output.

use rollcall_model::{MatchTable, Participant};

use crate::fields::DocumentFields;

/// A fully substituted document paired with its delivery address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    pub recipient: String,
    pub body: String,
}

/// Render the notification document for one participant.
pub fn render(participant: &Participant, rooms: &MatchTable) -> RenderedDocument {
    let fields = DocumentFields::project(participant, rooms);
    RenderedDocument {
        recipient: participant.email.clone(),
        body: render_body(&fields),
    }
}

fn render_body(fields: &DocumentFields) -> String {
    format!(
        "<html><body>\n\
         親愛的靈糧家人 {first_name} {last_name},<br><br>\n\
         \u{0020}   馬上就是北美靈糧青年特會\n\
         \u{0020}   <a href=\"https://rolcc.net/rolcc2/assemble2024/\">Assemble2024</a>啦🎉!\n\
         \u{0020}   <br><br>\n\
         \u{0020}   在大家出發前，有一些重要的注意事項和備忘，請仔細閱讀附件的<b>PDF特會手冊</b>並做好準備。<br><br>\n\
         \u{0020}   以下是你的<b><u>重要註冊信息</u></b>，\n\
         \u{0020}   <b>請確保mark這封email。在進行註冊時，請提供同工你的<u>報名序號</u></b>。\n\
         \u{0020}   <br><br>\n\
         \u{0020}   &emsp; 報名序號: <b>{display_id}</b><br>\n\
         \u{0020}   &emsp; T-shirt size: <b>{tshirt_size}</b><br>\n\
         \u{0020}   &emsp; Assemble 專題講座 (週六上午): <b>{session_a}</b>, 教室: <b>{room_a}</b><br>\n\
         \u{0020}   &emsp; Assemble 專題講座 (週六下午): <b>{session_b}</b>, 教室: <b>{room_b}</b><br>\n\
         \u{0020}   &emsp; 9/27週五是否有代訂便當 : <b>{dinner_friday}</b><br>\n\
         \u{0020}   &emsp; 9/28週六下午是否參加生命河靈糧堂事工導覽 : <b>{tour_guide}</b><br>\n\
         \u{0020}   &emsp; 9/29週日是否需要午餐 : <b>{lunch_sunday}</b><br>\n\
         \u{0020}   <br>\n\
         我們期待9月27日在生命河與你相會！\n\
         <br><br>\n\
         主內，<br>\n\
         矽谷生命河靈糧堂Assemble全體同工&牧者團隊\n\
         </body></html>\n",
        first_name = fields.first_name,
        last_name = fields.last_name,
        display_id = fields.display_id,
        tshirt_size = fields.tshirt_size,
        session_a = fields.session_a,
        room_a = fields.room_a,
        session_b = fields.session_b,
        room_b = fields.room_b,
        dinner_friday = fields.dinner_friday,
        tour_guide = fields.saturday_tour_guide,
        lunch_sunday = fields.lunch_sunday,
    )
}
