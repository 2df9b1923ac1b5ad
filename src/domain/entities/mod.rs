//! # Domain Entities Module
//!
//! MongoDB 컬렉션과 1:1 대응되는 문서 구조체들을 정의합니다.
//! 이 애플리케이션의 영속 엔티티는 `User` 하나뿐입니다.

pub mod users;
