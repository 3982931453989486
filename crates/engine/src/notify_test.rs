#[cfg(test)]
mod tests {
    use crate::notify::*;
    use common::models::Category;

    // person-centric categories name the user

    #[test]
    fn test_person_messages_per_level() {
        assert_eq!(
            milestone_message(Category::PinsPosted, 3),
            "Vous êtes désormais un pinneur amateur !"
        );
        assert_eq!(
            milestone_message(Category::LikesPosted, 5),
            "Vous êtes désormais un liker acharné !"
        );
        assert_eq!(
            milestone_message(Category::Connections, 7),
            "Vous êtes désormais un habitué d'or !"
        );
        assert_eq!(
            milestone_message(Category::SavedPins, 10),
            "Vous êtes désormais un collectionneur absolu !"
        );
        assert_eq!(
            milestone_message(Category::CommentsPosted, 3),
            "Vous êtes désormais un commentateur amateur !"
        );
    }

    // element-centric categories describe the pins

    #[test]
    fn test_element_messages_per_level() {
        assert_eq!(
            milestone_message(Category::LikesReceived, 5),
            "Vos pins sont très aimés !"
        );
        assert_eq!(
            milestone_message(Category::CommentsReceived, 10),
            "Vos pins sont incontestablement commentés !"
        );
        assert_eq!(
            milestone_message(Category::LikesReceivedOnePin, 7),
            "Un de vos pins est extrêment aimé !"
        );
        assert_eq!(
            milestone_message(Category::CommentsReceivedOnePin, 3),
            "Un de vos pins est bien commenté !"
        );
    }

    #[test]
    fn test_champion_messages() {
        assert_eq!(
            champion_message(3),
            "Champion ! Toutes vos catégories ont atteint le niveau 3 !"
        );
        assert_eq!(
            champion_message(10),
            "Champion absolu ! Toutes vos catégories sont au niveau maximum !"
        );
    }

    #[test]
    fn test_secret_message() {
        assert_eq!(SECRET_MESSAGE, "Curieux !");
    }
}
