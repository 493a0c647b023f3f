use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::encode::IsNull;
use sqlx::error::BoxDynError;
use sqlx::sqlite::{SqliteArgumentValue, SqliteTypeInfo, SqliteValueRef};
use sqlx::{Decode, Encode, Sqlite, Type};

/// A value stored as a JSON TEXT column. Nested aggregate collections use
/// this so a whole document round-trips through a single row.
#[derive(Clone, Debug)]
pub struct DJson<T>(pub T);

impl<T> DJson<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> From<T> for DJson<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}

impl<T> std::ops::Deref for DJson<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> Decode<'_, Sqlite> for DJson<T>
where
    T: DeserializeOwned,
{
    fn decode(value: SqliteValueRef<'_>) -> Result<Self, BoxDynError> {
        let raw = <String as Decode<Sqlite>>::decode(value)?;
        let inner = serde_json::from_str(&raw)?;
        Ok(Self(inner))
    }
}

impl<T> Encode<'_, Sqlite> for DJson<T>
where
    T: Serialize,
{
    fn encode_by_ref(
        &self,
        args: &mut Vec<SqliteArgumentValue<'_>>,
    ) -> Result<IsNull, BoxDynError> {
        let raw = serde_json::to_string(&self.0)?;
        args.push(SqliteArgumentValue::Text(raw.into()));
        Ok(IsNull::No)
    }
}

impl<T> Type<Sqlite> for DJson<T> {
    fn compatible(ty: &SqliteTypeInfo) -> bool {
        <String as Type<Sqlite>>::compatible(ty)
    }

    fn type_info() -> SqliteTypeInfo {
        <String as Type<Sqlite>>::type_info()
    }
}
