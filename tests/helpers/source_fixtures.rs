//! A small Go package split over three files.

pub const MODELS: &str = r#"package shop

import "time"

type Item struct {
	SKU   string
	Price int
}

type Order struct {
	ID      string
	Items   []Item
	Created time.Time
}

func (o *Order) Total() int {
	total := 0
	for _, item := range o.Items {
		total += item.Price
	}
	return total
}
"#;

pub const STORE: &str = r#"package shop

import (
	"errors"
	"sync"
)

type Store interface {
	Get(id string) (*Order, error)
	Put(order *Order) error
}

type MemoryStore struct {
	mu     sync.Mutex
	orders map[string]*Order
}

func (s *MemoryStore) Get(id string) (*Order, error) {
	s.mu.Lock()
	defer s.mu.Unlock()
	order, ok := s.orders[id]
	if !ok {
		return nil, errors.New("not found")
	}
	return order, nil
}

func (s *MemoryStore) Put(order *Order) error {
	s.mu.Lock()
	defer s.mu.Unlock()
	s.orders[order.ID] = order
	return nil
}
"#;

pub const MAIN: &str = r#"package shop

import "fmt"

func Report(store Store, id string) string {
	order, err := store.Get(id)
	if err != nil {
		return err.Error()
	}
	return fmt.Sprintf("%s: %d", order.ID, order.Total())
}
"#;

pub const FILES: &[(&str, &str)] = &[("models.go", MODELS), ("store.go", STORE), ("main.go", MAIN)];
