//! Game sample view
//!
//! One clickable tile per sampled game: a mini-board and both players.

use crate::i18n::{Trans, TransKey};
use crate::miniboard::{self, STATE_ATTR};
use crate::vdom::{h, MaybeVNode, VNode};

use super::model::{Game, InsightVm, Player};

/// Render the game sample box, or nothing while there is no answer
pub fn render(vm: &InsightVm, trans: &Trans) -> MaybeVNode {
    let answer = vm.answer.as_ref()?;

    Some(
        h("div.game-sample.box")
            .child(h("div.top").text(trans.noarg(TransKey::GameSampleTitle)))
            .child(h("div.boards").children(answer.games.iter().map(mini_game)))
            .build(),
    )
}

/// Link target of a game tile
pub fn game_href(game: &Game) -> String {
    format!("/{}/{}", game.id, game.color)
}

fn mini_game(game: &Game) -> VNode {
    h("a")
        .key(game.id.as_str())
        .attr("key", game.id.as_str())
        .attr("href", game_href(game))
        .child(
            h("span.mini-board.is2d")
                .attr(
                    STATE_ATTR,
                    miniboard::state_attr(&game.fen, game.color, &game.last_move),
                )
                .on_insert(miniboard::init_hook())
                .on_update(miniboard::init_hook()),
        )
        .child(
            h("span.vstext")
                .child(player_line(&game.user1))
                .child(opponent_line(&game.user2)),
        )
        .build()
}

/// Name, then title before the rating
fn player_line(player: &Player) -> VNode {
    let mut line = h("span.vstext__pl").text(player.name.as_str()).child(h("br"));
    if let Some(title) = &player.title {
        line = line.text(format!("{} ", title));
    }
    line.child(h("rating").text(player.rating.to_string())).build()
}

/// Name, then title after the rating
fn opponent_line(player: &Player) -> VNode {
    let mut line = h("span.vstext__op")
        .text(player.name.as_str())
        .child(h("br"))
        .child(h("rating").text(player.rating.to_string()));
    if let Some(title) = &player.title {
        line = line.text(format!(" {}", title));
    }
    line.build()
}
