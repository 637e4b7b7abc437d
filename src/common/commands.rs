/// Form body of `POST /board`. Both fields may be absent.
#[derive(Debug, Clone, Default)]
pub struct PostForm {
    pub nickname: Option<String>,
    pub content: Option<String>,
}

/// A post that passed validation and may be appended to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub nickname: String,
    pub content: String,
}

impl PostForm {
    /// Collect the fields from decoded form pairs. A repeated field keeps its
    /// first value; unknown fields are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut form = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "nickname" => &mut form.nickname,
                "content" => &mut form.content,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        form
    }

    /// Both fields must be present and non-blank after trimming.
    /// Accepted values keep their original whitespace.
    pub fn validate(self) -> Option<NewPost> {
        let nickname = self.nickname.filter(|value| !value.trim().is_empty())?;
        let content = self.content.filter(|value| !value.trim().is_empty())?;
        Some(NewPost { nickname, content })
    }
}
